use super::*;

/// Tests creating a lesson with thesis items.
///
/// Expected: lesson stored under the level with thesis order preserved
#[tokio::test]
async fn stores_thesis_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let section = factory::create_section(db, course.id).await?;
    let level = factory::create_level(db, course.id, section.id).await?;
    let repo = LessonRepository::new(db);

    let lesson = repo.create(level_path(&level), content("Fractions")).await?;

    let stored = repo.find_by_id(lesson.id).await?.unwrap();
    assert_eq!(stored.level_id, level.id);
    assert_eq!(stored.thesis, vec!["First".to_string(), "Second".to_string()]);
    assert!(stored.status_free);

    let listed = repo.get_by_level(level_path(&level)).await?;
    assert_eq!(listed.len(), 1);

    Ok(())
}
