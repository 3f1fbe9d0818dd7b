use super::*;

/// Tests loading a teacher profile.
///
/// Expected: Ok(Some) joining the user name and time on site with zero metrics
#[tokio::test]
async fn joins_user_and_metrics() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, _) = factory::create_teacher(db).await?;

    let profile = TeacherInfoRepository::new(db)
        .find_profile(teacher.id)
        .await?
        .unwrap();

    assert_eq!(profile.id, teacher.id);
    assert_eq!(profile.first_name, teacher.first_name);
    assert_eq!(profile.info.good, 0);

    Ok(())
}

/// Tests that students are not reported as teachers.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_user(db).await?;

    let profile = TeacherInfoRepository::new(db).find_profile(student.id).await?;

    assert!(profile.is_none());

    Ok(())
}
