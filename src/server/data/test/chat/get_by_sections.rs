use super::*;

/// Tests filtering chats by section.
///
/// Expected: only the chat in the requested section
#[tokio::test]
async fn filters_by_section() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, lesson, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    factory::helpers::create_chat_with_dependencies(db).await?;

    let chats = ChatRepository::new(db)
        .get_by_sections(vec![lesson.section_id])
        .await?;

    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, chat.id);

    Ok(())
}

/// Tests a teacher without sections.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_sections_return_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_chat_with_dependencies(db).await?;

    let chats = ChatRepository::new(db).get_by_sections(Vec::new()).await?;

    assert!(chats.is_empty());

    Ok(())
}
