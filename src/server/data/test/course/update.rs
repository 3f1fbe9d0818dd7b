use super::*;

/// Tests writing new pricing.
///
/// Expected: Ok(Some) with every field replaced
#[tokio::test]
async fn writes_pricing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let updated = CourseRepository::new(db)
        .update(course.id, "Algebra II".to_string(), 2000, 10, 1800)
        .await?
        .unwrap();

    assert_eq!(updated.name, "Algebra II");
    assert_eq!((updated.cost, updated.sale, updated.total_price), (2000, 10, 1800));

    Ok(())
}

/// Tests updating a missing course.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CourseRepository::new(db)
        .update(77, "Nothing".to_string(), 1, 0, 1)
        .await?;

    assert!(updated.is_none());

    Ok(())
}
