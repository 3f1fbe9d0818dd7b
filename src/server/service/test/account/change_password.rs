use super::*;

fn change(user_id: i32, old: &str, new: &str, repeat: &str) -> ChangePasswordParam {
    ChangePasswordParam {
        user_id,
        old_password: old.to_string(),
        new_password: new.to_string(),
        repeat_password: repeat.to_string(),
    }
}

/// Tests changing the password and signing in with the new one.
///
/// Expected: old password rejected, new password accepted
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET, 1);
    let service = AccountService::new(db, &jwt);

    let token = service
        .register(RegisterParam::new("anna@example.com", "Anna", "secret")?)
        .await?;
    let user_id = jwt.verify(&token).unwrap().user_id;

    service
        .change_password(change(user_id, "secret", "better", " better "))
        .await?;

    assert!(service.authorize("anna@example.com", "secret").await.is_err());
    assert!(service.authorize("anna@example.com", "better").await.is_ok());

    Ok(())
}

/// Tests the validation order of a password change.
///
/// Expected: mismatch reported before the old password is checked, then a wrong old
/// password is rejected
#[tokio::test]
async fn rejects_invalid_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET, 1);
    let service = AccountService::new(db, &jwt);

    let token = service
        .register(RegisterParam::new("anna@example.com", "Anna", "secret")?)
        .await?;
    let user_id = jwt.verify(&token).unwrap().user_id;

    let mismatch = service
        .change_password(change(user_id, "wrong", "one", "two"))
        .await;
    let wrong_old = service
        .change_password(change(user_id, "wrong", "one", "one"))
        .await;

    assert!(matches!(
        mismatch,
        Err(AppError::AuthErr(AuthError::PasswordsDoNotMatch))
    ));
    assert!(matches!(
        wrong_old,
        Err(AppError::AuthErr(AuthError::IncorrectPassword))
    ));

    Ok(())
}
