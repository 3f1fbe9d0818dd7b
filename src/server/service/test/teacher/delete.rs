use super::*;

/// Tests deleting a teacher.
///
/// Expected: user, metrics and section assignments removed
#[tokio::test]
async fn deletes_teacher_with_assignments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;
    let section = factory::section::create_section(db, course.id).await?;
    let (teacher, _) = factory::teacher::create_teacher(db).await?;
    factory::section::assign_teacher(db, section.id, teacher.id).await?;

    let deleted = TeacherService::new(db).delete(teacher.id).await?;

    assert!(deleted);
    assert!(UserRepository::new(db).find_by_id(teacher.id).await?.is_none());
    assert!(TeacherInfoRepository::new(db)
        .find_by_user_id(teacher.id)
        .await?
        .is_none());
    assert!(SectionTeacherRepository::new(db)
        .get_section_ids(teacher.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests deleting a student through the teacher route.
///
/// Expected: Ok(false) and the student kept
#[tokio::test]
async fn ignores_non_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::user::create_user(db).await?;

    let deleted = TeacherService::new(db).delete(student.id).await?;

    assert!(!deleted);
    assert!(UserRepository::new(db).find_by_id(student.id).await?.is_some());

    Ok(())
}
