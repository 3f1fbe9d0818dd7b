use super::*;

/// Tests a valid token of an existing user.
///
/// Expected: Ok(Claims) for a listed role and for `Permission::Any`
#[tokio::test]
async fn admits_listed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new("secret", 1);
    let (teacher, _) = factory::teacher::create_teacher(db).await?;
    let headers = headers_with(&jwt.issue(teacher.id, Role::Teacher)?);
    let guard = AuthGuard::new(db, &jwt, &headers);

    let claims = guard
        .require(&[Permission::Teacher, Permission::Admin])
        .await?;
    let any = guard.require(&[Permission::Any]).await?;

    assert_eq!(claims.user_id, teacher.id);
    assert_eq!(claims.role, Role::Teacher);
    assert_eq!(any.user_id, teacher.id);

    Ok(())
}

/// Tests a student token on an admin route.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new("secret", 1);
    let student = factory::user::create_user(db).await?;
    let headers = headers_with(&jwt.issue(student.id, Role::Student)?);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new("secret", 1);
    let headers = headers_with(&jwt.issue(4242, Role::Admin)?);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests requests without a token, with a garbage token and with a foreign signature.
///
/// Expected: MissingToken, then InvalidToken twice
#[tokio::test]
async fn rejects_broken_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new("secret", 1);
    let student = factory::user::create_user(db).await?;
    let foreign = JwtKeys::new("other-secret", 1).issue(student.id, Role::Student)?;

    let empty = HeaderMap::new();
    let garbage = headers_with("not-a-token");
    let forged = headers_with(&foreign);

    let missing = AuthGuard::new(db, &jwt, &empty)
        .require(&[Permission::Any])
        .await;
    let invalid = AuthGuard::new(db, &jwt, &garbage)
        .require(&[Permission::Any])
        .await;
    let wrong_key = AuthGuard::new(db, &jwt, &forged)
        .require(&[Permission::Any])
        .await;

    assert!(matches!(
        missing,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
    assert!(matches!(
        invalid,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
    assert!(matches!(
        wrong_key,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
