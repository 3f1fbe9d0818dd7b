use super::*;

/// Tests listing all teachers, including one without a metrics row.
///
/// Expected: both teachers in id order, the second with zeroed metrics
#[tokio::test]
async fn lists_teachers_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::create_teacher(db).await?;
    let second = factory::user::UserFactory::new(db)
        .role("teacher")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = TeacherInfoRepository::new(db);
    repo.increment(first.id, TeacherCounter::Good).await?;

    let profiles = repo.get_all_profiles().await?;

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].id, first.id);
    assert_eq!(profiles[0].info.good, 1);
    assert_eq!(profiles[1].id, second.id);
    assert_eq!(profiles[1].info.answer_count, 0);

    Ok(())
}
