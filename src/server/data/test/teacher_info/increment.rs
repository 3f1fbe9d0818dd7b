use super::*;

/// Tests that each counter increments independently.
///
/// Expected: good 2, improve 1, ahtung 1
#[tokio::test]
async fn increments_selected_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, _) = factory::create_teacher(db).await?;
    let repo = TeacherInfoRepository::new(db);

    repo.increment(teacher.id, TeacherCounter::Good).await?;
    repo.increment(teacher.id, TeacherCounter::Good).await?;
    repo.increment(teacher.id, TeacherCounter::Improve).await?;
    repo.increment(teacher.id, TeacherCounter::Ahtung).await?;

    let info = repo.find_by_user_id(teacher.id).await?.unwrap();
    assert_eq!((info.good, info.improve, info.ahtung), (2, 1, 1));

    Ok(())
}

/// Tests incrementing a counter of a user without metrics.
///
/// Expected: Err(AppError::Internal(MissingRow))
#[tokio::test]
async fn fails_without_metrics_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeacherInfoRepository::new(db)
        .increment(42, TeacherCounter::Improve)
        .await;

    assert!(matches!(result, Err(AppError::Internal(_))));

    Ok(())
}
