use super::*;

/// Tests accumulating answer time.
///
/// Expected: total seconds summed, count 2, average 15 minutes
#[tokio::test]
async fn accumulates_answer_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, _) = factory::create_teacher(db).await?;
    let repo = TeacherInfoRepository::new(db);

    repo.record_answer(teacher.id, 600).await?;
    repo.record_answer(teacher.id, 1200).await?;

    let info = repo.find_by_user_id(teacher.id).await?.unwrap();
    assert_eq!(info.answer_time_seconds, 1800);
    assert_eq!(info.answer_count, 2);
    assert_eq!(info.average_answer_minutes(), 15);

    Ok(())
}
