use super::*;

/// Tests opening a chat and finding it by lesson and student.
///
/// Expected: the same chat returned, unrated and not escalated
#[tokio::test]
async fn finds_by_lesson_and_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, section, level, lesson) =
        factory::helpers::create_lesson_with_dependencies(db).await?;
    let student = factory::create_user(db).await?;
    let repo = ChatRepository::new(db);

    let chat = repo
        .create(
            LessonPath {
                course_id: course.id,
                section_id: section.id,
                level_id: level.id,
                lesson_id: lesson.id,
            },
            student.id,
        )
        .await?;

    let found = repo
        .find_by_lesson_and_student(lesson.id, student.id)
        .await?
        .unwrap();

    assert_eq!(found.id, chat.id);
    assert!(!found.ahtung);
    assert!(found.rating.is_none());
    assert!(repo
        .find_by_lesson_and_student(lesson.id, student.id + 1000)
        .await?
        .is_none());

    Ok(())
}
