use super::*;

/// Tests that a new code replaces the previous one.
///
/// Expected: only the latest code stored
#[tokio::test]
async fn keeps_latest_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RecoveryCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecoveryCodeRepository::new(db);
    repo.replace("anna@example.com", "AAAAA".to_string()).await?;
    repo.replace("anna@example.com", "BBBBB".to_string()).await?;

    let stored = repo.find("anna@example.com").await?.unwrap();
    assert_eq!(stored.code, "BBBBB");

    repo.delete("anna@example.com").await?;
    assert!(repo.find("anna@example.com").await?.is_none());

    Ok(())
}
