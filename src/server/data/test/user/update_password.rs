use super::*;

/// Tests replacing the stored password hash.
///
/// Expected: Ok(true) and the new hash stored
#[tokio::test]
async fn replaces_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.update_password(user.id, "new-hash".to_string()).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

/// Tests updating the password of a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update_password(404, "hash".to_string())
        .await?;

    assert!(!updated);

    Ok(())
}
