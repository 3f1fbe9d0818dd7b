use super::*;

/// Tests changing email and first name.
///
/// Expected: Ok(Some) with both fields replaced
#[tokio::test]
async fn updates_email_and_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, _) = factory::create_teacher(db).await?;

    let updated = UserRepository::new(db)
        .update_profile(teacher.id, "new@example.com".to_string(), "Olga".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.first_name, "Olga");
    assert_eq!(updated.role, Role::Teacher);

    Ok(())
}
