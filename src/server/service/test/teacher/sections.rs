use super::*;

/// Tests assigning sections to a teacher, twice, then unassigning one.
///
/// Expected: assignment is idempotent and the listing follows the changes
#[tokio::test]
async fn assigns_and_unassigns_sections() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;
    let first = factory::section::create_section(db, course.id).await?;
    let second = factory::section::create_section(db, course.id).await?;
    let (teacher, _) = factory::teacher::create_teacher(db).await?;
    let service = TeacherService::new(db);

    service.assign_section(teacher.id, first.id).await?;
    service.assign_section(teacher.id, first.id).await?;
    service.assign_section(teacher.id, second.id).await?;
    service.unassign_section(teacher.id, second.id).await?;

    let sections = service.get_sections(teacher.id).await?.unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].id, first.id);

    Ok(())
}

/// Tests assigning an unknown section or an unknown teacher.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn rejects_unknown_parties() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;
    let section = factory::section::create_section(db, course.id).await?;
    let (teacher, _) = factory::teacher::create_teacher(db).await?;
    let service = TeacherService::new(db);

    let unknown_section = service.assign_section(teacher.id, section.id + 1000).await;
    let unknown_teacher = service.assign_section(teacher.id + 1000, section.id).await;

    assert!(matches!(unknown_section, Err(AppError::NotFound(_))));
    assert!(matches!(unknown_teacher, Err(AppError::NotFound(_))));

    Ok(())
}
