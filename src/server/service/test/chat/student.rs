use super::*;

/// Tests the first student message on a lesson.
///
/// Expected: no chat before, a chat with the message after
#[tokio::test]
async fn creates_chat_on_first_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, lesson) = factory::helpers::create_lesson_with_dependencies(db).await?;
    let student = factory::user::UserFactory::new(db)
        .first_name("Anna")
        .build()
        .await?;
    let service = ChatService::new(db);
    let path = lesson_path(&lesson);

    let before = service.student_thread(path, student.id).await?.unwrap();
    let message = service
        .student_send(path, student.id, "  Is this right?  ")
        .await?
        .unwrap();
    let after = service.student_thread(path, student.id).await?.unwrap();

    assert!(before.chat.is_none());
    assert_eq!(message.text, "Is this right?");
    assert_eq!(message.first_name, "Anna");
    assert_eq!(message.role, Role::Student);
    assert_eq!(after.chat.map(|chat| chat.id), Some(message.chat_id));
    assert_eq!(after.messages.len(), 1);

    Ok(())
}

/// Tests that opening a chat marks only teacher messages read.
///
/// Expected: teacher message read, own message still unread
#[tokio::test]
async fn marks_teacher_messages_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (student, _, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    factory::chat::create_message(db, chat.id, "student").await?;
    factory::chat::create_message(db, chat.id, "teacher").await?;

    let thread = ChatService::new(db).student_chat(chat.id, student.id).await?;

    let unread: Vec<Role> = thread
        .messages
        .iter()
        .filter(|message| message.not_read)
        .map(|message| message.role)
        .collect();
    assert_eq!(unread, vec![Role::Student]);

    Ok(())
}

/// Tests access to another student's chat and to a missing chat.
///
/// Expected: AccessDenied and NotFound
#[tokio::test]
async fn guards_chat_ownership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let service = ChatService::new(db);

    let foreign = service.student_reply(chat.id, intruder.id, "hi").await;
    let missing = service.student_chat(chat.id + 1000, intruder.id).await;

    assert!(matches!(
        foreign,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests sending an empty message.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (student, _, lesson, _) = factory::helpers::create_chat_with_dependencies(db).await?;

    let result = ChatService::new(db)
        .student_send(lesson_path(&lesson), student.id, "   ")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
