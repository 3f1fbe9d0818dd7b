use super::*;

/// Tests that a lesson path must chain through its level.
///
/// Expected: Some for the real path, None with a foreign level id
#[tokio::test]
async fn rejects_foreign_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, section, level, lesson) =
        factory::helpers::create_lesson_with_dependencies(db).await?;
    let other_level = factory::create_level(db, course.id, section.id).await?;
    let repo = LessonRepository::new(db);

    let path = LessonPath {
        course_id: course.id,
        section_id: section.id,
        level_id: level.id,
        lesson_id: lesson.id,
    };

    assert!(repo.find(path).await?.is_some());
    assert!(repo
        .find(LessonPath {
            level_id: other_level.id,
            ..path
        })
        .await?
        .is_none());

    Ok(())
}
