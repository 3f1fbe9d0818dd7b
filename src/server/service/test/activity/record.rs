use super::*;

/// Tests two requests ten minutes apart.
///
/// Expected: ten minutes added to the user's time on site
#[tokio::test]
async fn adds_time_within_visit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await?;
    let service = ActivityService::new(db);
    let start = Utc::now() - Duration::minutes(10);

    let first = service.record(user.id, "/courses/all", start).await?;
    let second = service.record(user.id, "/courses/1", Utc::now()).await?;

    assert_eq!(first, 0);
    assert!(second >= 600);
    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.times_seconds, second);

    Ok(())
}

/// Tests a request after a long pause.
///
/// Expected: nothing added, the request still logged
#[tokio::test]
async fn starts_new_visit_after_gap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await?;
    let service = ActivityService::new(db);
    let now = Utc::now();

    service
        .record(user.id, "/courses/all", now - Duration::hours(2))
        .await?;
    let added = service.record(user.id, "/courses/all", now).await?;

    assert_eq!(added, 0);
    let latest = RequestLogRepository::new(db)
        .latest_for_user(user.id)
        .await?
        .unwrap();
    assert!((latest - now).num_seconds().abs() < 1);

    Ok(())
}
