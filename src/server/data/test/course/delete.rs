use super::*;

/// Tests deleting a course.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let repo = CourseRepository::new(db);

    assert!(repo.delete(course.id).await?);
    assert!(!repo.delete(course.id).await?);
    assert!(repo.find_by_id(course.id).await?.is_none());

    Ok(())
}
