use super::*;

/// Tests creating lessons in a level without a carousel yet.
///
/// Expected: carousel created on the first lesson and extended in creation order
#[tokio::test]
async fn appends_lessons_to_carousel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;
    let section = factory::section::create_section(db, course.id).await?;
    let level = factory::level::create_level(db, course.id, section.id).await?;
    let service = LessonService::new(db);

    let first = service
        .create(level_path(&level), content("First"))
        .await?
        .unwrap();
    let second = service
        .create(level_path(&level), content("Second"))
        .await?
        .unwrap();

    let carousel = CarouselRepository::new(db).find(level.id).await?.unwrap();
    assert_eq!(carousel.lesson_ids(), &[first.id, second.id]);

    Ok(())
}

/// Tests creating a lesson under a level path with the wrong section.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_unknown_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;
    let section = factory::section::create_section(db, course.id).await?;
    let level = factory::level::create_level(db, course.id, section.id).await?;

    let mut path = level_path(&level);
    path.section_id += 1000;
    let created = LessonService::new(db).create(path, content("Lost")).await?;

    assert!(created.is_none());

    Ok(())
}
