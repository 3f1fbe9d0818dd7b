use super::*;

/// Tests that assigning twice keeps a single assignment.
///
/// Expected: one section id listed for the teacher
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let section = factory::create_section(db, course.id).await?;
    let (teacher, _) = factory::create_teacher(db).await?;
    let repo = SectionTeacherRepository::new(db);

    repo.assign(section.id, teacher.id).await?;
    repo.assign(section.id, teacher.id).await?;

    assert_eq!(repo.get_section_ids(teacher.id).await?, vec![section.id]);

    Ok(())
}

/// Tests removing an assignment.
///
/// Expected: teacher no longer assigned, other sections kept
#[tokio::test]
async fn unassigns_single_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let first = factory::create_section(db, course.id).await?;
    let second = factory::create_section(db, course.id).await?;
    let (teacher, _) = factory::create_teacher(db).await?;
    let repo = SectionTeacherRepository::new(db);

    repo.assign(first.id, teacher.id).await?;
    repo.assign(second.id, teacher.id).await?;
    repo.unassign(first.id, teacher.id).await?;

    assert!(!repo.is_assigned(first.id, teacher.id).await?);
    assert_eq!(repo.get_section_ids(teacher.id).await?, vec![second.id]);

    Ok(())
}
