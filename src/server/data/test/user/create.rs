use super::*;

/// Tests creating a student and reading it back by email.
///
/// Expected: Ok with role, names and zero time on site preserved
#[tokio::test]
async fn creates_user_found_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParam {
            email: "anna@example.com".to_string(),
            first_name: "Anna".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Student,
        })
        .await?;

    let found = repo.find_by_email("anna@example.com").await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.role, Role::Student);
    assert_eq!(found.first_name, "Anna");
    assert_eq!(found.times_seconds, 0);

    Ok(())
}

/// Tests that a duplicate email violates the unique index.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            email: existing.email,
            first_name: "Copy".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Teacher,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests that a stored role outside the known set surfaces as an internal error.
///
/// Expected: Err(AppError::Internal)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("janitor")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(user.id).await;

    assert!(matches!(result, Err(AppError::Internal(_))));

    Ok(())
}
