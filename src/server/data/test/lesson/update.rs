use super::*;

/// Tests replacing lesson content.
///
/// Expected: Ok(Some) with new content, id unchanged
#[tokio::test]
async fn replaces_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, section, level, lesson) =
        factory::helpers::create_lesson_with_dependencies(db).await?;
    let path = LessonPath {
        course_id: course.id,
        section_id: section.id,
        level_id: level.id,
        lesson_id: lesson.id,
    };

    let updated = LessonRepository::new(db)
        .update(path, content("Decimals"))
        .await?
        .unwrap();

    assert_eq!(updated.id, lesson.id);
    assert_eq!(updated.name, "Decimals");
    assert_eq!(updated.task, "Solve it");

    Ok(())
}
