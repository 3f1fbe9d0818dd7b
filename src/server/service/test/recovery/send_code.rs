use super::*;

/// Tests issuing a code for a known email.
///
/// Expected: a 5-character code stored that checks as valid in any letter case
#[tokio::test]
async fn issues_checkable_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db)
        .email("anna@example.com")
        .build()
        .await?;
    let mailer = Mailer::log_only();
    let service = RecoveryService::new(db, &mailer, 60);

    service.send_code(" Anna@example.com").await?;

    let stored = RecoveryCodeRepository::new(db)
        .find("anna@example.com")
        .await?
        .unwrap();
    assert_eq!(stored.code.len(), 5);
    assert!(
        service
            .check_code("anna@example.com", &stored.code.to_lowercase())
            .await?
    );
    assert!(!service.check_code("anna@example.com", "-----").await?);

    Ok(())
}

/// Tests requesting a code for an unknown email.
///
/// Expected: Err(AuthError::EmailNotFound)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = Mailer::log_only();

    let result = RecoveryService::new(db, &mailer, 60)
        .send_code("nobody@example.com")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailNotFound))
    ));

    Ok(())
}

/// Tests that an expired code no longer checks.
///
/// Expected: false with a zero lifetime
#[tokio::test]
async fn expired_code_is_invalid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db)
        .email("anna@example.com")
        .build()
        .await?;
    let mailer = Mailer::log_only();
    let service = RecoveryService::new(db, &mailer, 0);

    service.send_code("anna@example.com").await?;
    let stored = RecoveryCodeRepository::new(db)
        .find("anna@example.com")
        .await?
        .unwrap();

    assert!(!service.check_code("anna@example.com", &stored.code).await?);

    Ok(())
}
