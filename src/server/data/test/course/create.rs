use super::*;

/// Tests creating a course at full price.
///
/// Expected: sale 0 and total price equal to cost
#[tokio::test]
async fn creates_at_full_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParam {
            name: "Geometry".to_string(),
            cost: 4500,
        })
        .await?;

    assert_eq!(course.sale, 0);
    assert_eq!(course.total_price, 4500);
    assert_eq!(repo.find_by_id(course.id).await?, Some(course));

    Ok(())
}

/// Tests listing courses.
///
/// Expected: courses in creation order
#[tokio::test]
async fn lists_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_course(db).await?;
    let second = factory::create_course(db).await?;

    let courses = CourseRepository::new(db).get_all().await?;

    let ids: Vec<i32> = courses.iter().map(|course| course.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
