use super::*;

/// Tests that only messages from the given roles are marked read.
///
/// Expected: teacher message read, student message still unread
#[tokio::test]
async fn marks_only_selected_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    factory::create_message(db, chat.id, "student").await?;
    factory::create_message(db, chat.id, "teacher").await?;

    let repo = MessageRepository::new(db);
    let marked = repo
        .mark_read(chat.id, &[Role::Teacher, Role::Admin])
        .await?;

    assert_eq!(marked, 1);
    let messages = repo.get_by_chat(chat.id).await?;
    let student = messages.iter().find(|m| m.role == Role::Student).unwrap();
    let teacher = messages.iter().find(|m| m.role == Role::Teacher).unwrap();
    assert!(student.not_read);
    assert!(!teacher.not_read);

    Ok(())
}
