use super::*;

/// Tests a student's chat list.
///
/// Expected: unread teacher messages counted and the teacher answer shown
#[tokio::test]
async fn summarizes_teacher_answers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (student, _, lesson, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let now = Utc::now();
    MessageFactory::new(db, chat.id)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    MessageFactory::new(db, chat.id)
        .role("teacher")
        .text("Check the second sentence")
        .created_at(now)
        .build()
        .await?;

    let previews = PreviewService::new(db).for_student(student.id).await?;

    assert_eq!(previews.len(), 1);
    let dto = previews.into_iter().next().unwrap().into_student_dto();
    assert_eq!(dto.lesson_name, lesson.name);
    assert_eq!(dto.last_message, "Check the second sentence");
    assert_eq!(dto.not_view_message, 1);

    Ok(())
}
