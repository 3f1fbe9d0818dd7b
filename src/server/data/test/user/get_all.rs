use super::*;

/// Tests listing users filtered by role.
///
/// Expected: only teachers returned for the teacher filter, everyone without one
#[tokio::test]
async fn filters_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let (teacher, _) = factory::create_teacher(db).await?;
    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let teachers = repo.get_all(Some(Role::Teacher)).await?;
    let everyone = repo.get_all(None).await?;

    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].id, teacher.id);
    assert_eq!(everyone.len(), 3);

    Ok(())
}

/// Tests listing with no users.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all(Some(Role::Admin)).await?;

    assert!(users.is_empty());

    Ok(())
}
