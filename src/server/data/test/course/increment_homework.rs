use super::*;

/// Tests bumping the homework counter.
///
/// Expected: homework_count 2 after two increments
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let repo = CourseRepository::new(db);

    repo.increment_homework(course.id).await?;
    repo.increment_homework(course.id).await?;

    assert_eq!(repo.find_by_id(course.id).await?.unwrap().homework_count, 2);

    Ok(())
}
