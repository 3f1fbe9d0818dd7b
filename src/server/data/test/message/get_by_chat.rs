use super::*;

/// Tests message ordering and the newest message lookup.
///
/// Expected: oldest first, newest is the latest timestamp
#[tokio::test]
async fn orders_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let now = Utc::now();
    factory::chat::MessageFactory::new(db, chat.id)
        .text("second")
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    factory::chat::MessageFactory::new(db, chat.id)
        .text("first")
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_chat(chat.id).await?;
    let newest = repo.newest(chat.id).await?.unwrap();

    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(newest.text, "second");

    Ok(())
}

/// Tests appending a message.
///
/// Expected: stored unread with the sender's role and name
#[tokio::test]
async fn creates_unread_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;

    let message = MessageRepository::new(db)
        .create(CreateMessageParam {
            chat_id: chat.id,
            text: "Well done".to_string(),
            role: Role::Teacher,
            first_name: teacher.first_name.clone(),
        })
        .await?;

    assert!(message.not_read);
    assert_eq!(message.role, Role::Teacher);
    assert_eq!(message.first_name, teacher.first_name);

    Ok(())
}
