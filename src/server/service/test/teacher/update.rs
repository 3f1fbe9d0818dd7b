use super::*;

fn update(id: i32, email: &str, first_name: &str) -> UpdateTeacherParam {
    UpdateTeacherParam {
        id,
        email: email.to_string(),
        first_name: first_name.to_string(),
    }
}

/// Tests updating a teacher's email and name.
///
/// Expected: Ok(true) with the normalized email stored
#[tokio::test]
async fn updates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (teacher, _) = factory::teacher::create_teacher(db).await?;

    let updated = TeacherService::new(db)
        .update(update(teacher.id, " New@Example.com", "Irina"))
        .await?;

    assert!(updated);
    let user = UserRepository::new(db).find_by_id(teacher.id).await?.unwrap();
    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.first_name, "Irina");

    Ok(())
}

/// Tests the failure cases of a teacher update.
///
/// Expected: BadRequest for blanks, Ok(false) for an unknown teacher, EmailAlreadyExists
/// for another user's email
#[tokio::test]
async fn rejects_invalid_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (teacher, _) = factory::teacher::create_teacher(db).await?;
    let other = factory::user::create_user(db).await?;
    let service = TeacherService::new(db);

    let blank = service.update(update(teacher.id, " ", "Irina")).await;
    let missing = service
        .update(update(teacher.id + 1000, "x@example.com", "X"))
        .await?;
    let taken = service
        .update(update(teacher.id, &other.email, "Irina"))
        .await;

    assert!(matches!(blank, Err(AppError::BadRequest(_))));
    assert!(!missing);
    assert!(matches!(
        taken,
        Err(AppError::AuthErr(AuthError::EmailAlreadyExists))
    ));

    Ok(())
}
