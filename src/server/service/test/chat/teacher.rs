use super::*;

/// Tests answering a student message.
///
/// Expected: answer time recorded from the student's message
#[tokio::test]
async fn records_answer_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    MessageFactory::new(db, chat.id)
        .created_at(Utc::now() - Duration::minutes(10))
        .build()
        .await?;

    let answer = ChatService::new(db)
        .teacher_reply(chat.id, teacher.id, "Good job")
        .await?;

    let info = TeacherInfoRepository::new(db)
        .find_by_user_id(teacher.id)
        .await?
        .unwrap();
    assert_eq!(answer.role, Role::Teacher);
    assert_eq!(info.answer_count, 1);
    assert!(info.answer_time_seconds >= 600);

    Ok(())
}

/// Tests an answer whose metrics update fails.
///
/// Expected: error returned and the answer not stored
#[tokio::test]
async fn rolls_back_answer_without_metrics() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    factory::chat::create_message(db, chat.id, "student").await?;
    TeacherInfoRepository::new(db).delete(teacher.id).await?;

    let result = ChatService::new(db)
        .teacher_reply(chat.id, teacher.id, "Good job")
        .await;

    let messages = MessageRepository::new(db).get_by_chat(chat.id).await?;
    assert!(matches!(result, Err(AppError::Internal(_))));
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::Student);

    Ok(())
}

/// Tests a second teacher message in a row.
///
/// Expected: no answer time recorded
#[tokio::test]
async fn ignores_follow_up_messages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    factory::chat::create_message(db, chat.id, "teacher").await?;

    ChatService::new(db)
        .teacher_reply(chat.id, teacher.id, "One more thing")
        .await?;

    let info = TeacherInfoRepository::new(db)
        .find_by_user_id(teacher.id)
        .await?
        .unwrap();
    assert_eq!(info.answer_count, 0);

    Ok(())
}

/// Tests a teacher opening a chat of a section they are not assigned to.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_unassigned_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let (outsider, _) = factory::teacher::create_teacher(db).await?;

    let result = ChatService::new(db).teacher_chat(chat.id, outsider.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests toggling the escalation flag on and off.
///
/// Expected: counter incremented only when switching on
#[tokio::test]
async fn toggles_ahtung() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let service = ChatService::new(db);

    let on = service.toggle_ahtung(chat.id, teacher.id).await?;
    let stored = ChatRepository::new(db).find_by_id(chat.id).await?.unwrap();
    let off = service.toggle_ahtung(chat.id, teacher.id).await?;

    assert!(on);
    assert_eq!(stored.ahtung_teacher_id, Some(teacher.id));
    assert!(!off);
    let info = TeacherInfoRepository::new(db)
        .find_by_user_id(teacher.id)
        .await?
        .unwrap();
    assert_eq!(info.ahtung, 1);

    Ok(())
}

/// Tests rating a chat twice.
///
/// Expected: both teacher counters incremented, course homework counted once
#[tokio::test]
async fn counts_homework_on_first_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher, lesson, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let service = ChatService::new(db);

    service.rate(chat.id, teacher.id, Rating::Improve).await?;
    let rated = service.rate(chat.id, teacher.id, Rating::Good).await?;

    let course = CourseRepository::new(db)
        .find_by_id(lesson.course_id)
        .await?
        .unwrap();
    let info = TeacherInfoRepository::new(db)
        .find_by_user_id(teacher.id)
        .await?
        .unwrap();
    assert_eq!(rated.rating, Some(Rating::Good));
    assert_eq!(course.homework_count, 1);
    assert_eq!(info.good, 1);
    assert_eq!(info.improve, 1);

    Ok(())
}

/// Tests the admin view of a teacher's chat.
///
/// Expected: messages returned without touching read flags; other teachers get NotFound
#[tokio::test]
async fn admin_reads_without_marking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let (other, _) = factory::teacher::create_teacher(db).await?;
    factory::chat::create_message(db, chat.id, "student").await?;
    let service = ChatService::new(db);

    let thread = service.admin_chat(teacher.id, chat.id).await?;
    let foreign = service.admin_chat(other.id, chat.id).await;

    assert!(thread.messages.iter().all(|message| message.not_read));
    assert!(MessageRepository::new(db)
        .get_by_chat(chat.id)
        .await?
        .iter()
        .all(|message| message.not_read));
    assert!(matches!(foreign, Err(AppError::NotFound(_))));

    Ok(())
}
