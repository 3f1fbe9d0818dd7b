use super::*;

/// Tests deleting the only lesson of a level that has a chat.
///
/// Expected: chat removed and the emptied carousel row deleted
#[tokio::test]
async fn deletes_lesson_chats_and_empty_carousel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (student, _, lesson, _) = factory::helpers::create_chat_with_dependencies(db).await?;

    let deleted = LessonService::new(db).delete(lesson_path(&lesson)).await?;

    assert!(deleted);
    assert!(ChatRepository::new(db).get_by_student(student.id).await?.is_empty());
    assert!(CarouselRepository::new(db)
        .find(lesson.level_id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting one of two lessons.
///
/// Expected: the other lesson stays in the carousel
#[tokio::test]
async fn keeps_remaining_lessons_in_carousel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;
    let section = factory::section::create_section(db, course.id).await?;
    let level = factory::level::create_level(db, course.id, section.id).await?;
    let a = factory::lesson::create_lesson(db, &level).await?;
    let b = factory::lesson::create_lesson(db, &level).await?;
    factory::lesson::create_carousel(db, &level, vec![a.id, b.id]).await?;

    LessonService::new(db).delete(lesson_path(&a)).await?;

    let carousel = CarouselRepository::new(db).find(level.id).await?.unwrap();
    assert_eq!(carousel.lesson_ids(), &[b.id]);
    assert!(!LessonService::new(db).delete(lesson_path(&a)).await?);

    Ok(())
}
