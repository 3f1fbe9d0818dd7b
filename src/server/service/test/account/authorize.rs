use super::*;

/// Tests signing in with the registered credentials.
///
/// Expected: Ok with a token for the same user
#[tokio::test]
async fn authorizes_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET, 1);
    let service = AccountService::new(db, &jwt);

    let registered = service
        .register(RegisterParam::new("anna@example.com", "Anna", "secret")?)
        .await?;
    let token = service.authorize("Anna@example.com", " secret ").await?;

    assert_eq!(
        jwt.verify(&token).unwrap().user_id,
        jwt.verify(&registered).unwrap().user_id
    );

    Ok(())
}

/// Tests signing in with a wrong password and with an unknown email.
///
/// Expected: Err(AuthError::IncorrectPassword) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET, 1);
    let service = AccountService::new(db, &jwt);

    service
        .register(RegisterParam::new("anna@example.com", "Anna", "secret")?)
        .await?;

    let wrong_password = service.authorize("anna@example.com", "guess").await;
    let unknown_email = service.authorize("olga@example.com", "secret").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::IncorrectPassword))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::IncorrectPassword))
    ));

    Ok(())
}
