use super::*;

/// Tests registering a student.
///
/// Expected: Ok with a token for a new student account
#[tokio::test]
async fn registers_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET, 1);

    let param = RegisterParam::new(" Anna@Example.com ", "Anna", "secret")?;
    let token = AccountService::new(db, &jwt).register(param).await?;

    let claims = jwt.verify(&token).unwrap();
    assert_eq!(claims.role, Role::Student);

    let user = UserRepository::new(db)
        .find_by_email("anna@example.com")
        .await?
        .unwrap();
    assert_eq!(user.id, claims.user_id);
    assert_ne!(user.password_hash, "secret");

    Ok(())
}

/// Tests registering an email twice.
///
/// Expected: Err(AuthError::EmailAlreadyExists)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET, 1);
    let service = AccountService::new(db, &jwt);

    service
        .register(RegisterParam::new("anna@example.com", "Anna", "secret")?)
        .await?;
    let result = service
        .register(RegisterParam::new("ANNA@example.com", "Anna", "other")?)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailAlreadyExists))
    ));

    Ok(())
}
