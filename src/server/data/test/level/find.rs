use super::*;

/// Tests that a level is only found under its own course and section.
///
/// Expected: Some for the full path, None when the section differs
#[tokio::test]
async fn requires_matching_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let section = factory::create_section(db, course.id).await?;
    let other_section = factory::create_section(db, course.id).await?;
    let level = factory::create_level(db, course.id, section.id).await?;
    let repo = LevelRepository::new(db);

    let found = repo
        .find(LevelPath {
            course_id: course.id,
            section_id: section.id,
            level_id: level.id,
        })
        .await?;
    let foreign = repo
        .find(LevelPath {
            course_id: course.id,
            section_id: other_section.id,
            level_id: level.id,
        })
        .await?;

    assert!(found.is_some());
    assert!(foreign.is_none());

    Ok(())
}
