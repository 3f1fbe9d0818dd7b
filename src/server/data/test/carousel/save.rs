use super::*;

/// Tests creating a carousel row and later replacing its order.
///
/// Expected: stored order matches the last save
#[tokio::test]
async fn inserts_then_replaces_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let section = factory::create_section(db, course.id).await?;
    let level = factory::create_level(db, course.id, section.id).await?;
    let repo = CarouselRepository::new(db);

    let mut carousel = LessonCarousel::new(LevelPath {
        course_id: course.id,
        section_id: section.id,
        level_id: level.id,
    });
    carousel.push(3);
    repo.save(&carousel).await?;

    carousel.push(1);
    repo.save(&carousel).await?;

    let stored = repo.find(level.id).await?.unwrap();
    assert_eq!(stored.lesson_ids(), &[3, 1]);

    Ok(())
}

/// Tests saving an emptied carousel.
///
/// Expected: the row is removed
#[tokio::test]
async fn removes_empty_carousel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, level, lesson) = factory::helpers::create_lesson_with_dependencies(db).await?;
    let repo = CarouselRepository::new(db);

    let mut carousel = repo.find(level.id).await?.unwrap();
    assert!(carousel.remove(lesson.id));
    repo.save(&carousel).await?;

    assert!(repo.find(level.id).await?.is_none());

    Ok(())
}
