use super::*;

/// Tests recording a rating and an escalation.
///
/// Expected: rating, rating teacher and ahtung teacher stored
#[tokio::test]
async fn records_teacher_actions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let repo = ChatRepository::new(db);

    repo.set_rating(chat.id, Rating::Improve, teacher.id).await?;
    repo.set_ahtung(chat.id, true, Some(teacher.id)).await?;

    let stored = repo.find_by_id(chat.id).await?.unwrap();
    assert_eq!(stored.rating, Some(Rating::Improve));
    assert_eq!(stored.rating_teacher_id, Some(teacher.id));
    assert!(stored.ahtung);
    assert_eq!(stored.ahtung_teacher_id, Some(teacher.id));

    Ok(())
}

/// Tests rating a missing chat.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_chat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ChatRepository::new(db).set_rating(404, Rating::Good, 1).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests rating an unrated chat twice.
///
/// Expected: first call rates the chat, second changes nothing
#[tokio::test]
async fn rates_unrated_chat_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher, _, chat) = factory::helpers::create_chat_with_dependencies(db).await?;
    let repo = ChatRepository::new(db);

    let first = repo.rate_unrated(chat.id, Rating::Good, teacher.id).await?;
    let second = repo.rate_unrated(chat.id, Rating::Improve, teacher.id).await?;

    let stored = repo.find_by_id(chat.id).await?.unwrap();
    assert!(first);
    assert!(!second);
    assert_eq!(stored.rating, Some(Rating::Good));
    assert_eq!(stored.rating_teacher_id, Some(teacher.id));

    Ok(())
}
