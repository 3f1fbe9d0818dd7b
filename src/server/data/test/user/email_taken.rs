use super::*;

/// Tests detecting an email owned by another user.
///
/// Expected: Ok(true) for others, Ok(false) when the owner is excluded
#[tokio::test]
async fn ignores_excluded_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.email_taken(&user.email, None).await?);
    assert!(!repo.email_taken(&user.email, Some(user.id)).await?);
    assert!(!repo.email_taken("nobody@example.com", None).await?);

    Ok(())
}
