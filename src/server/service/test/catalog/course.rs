use super::*;

/// Tests creating a course.
///
/// Expected: full price, no sale, trimmed name
#[tokio::test]
async fn creates_course_at_full_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CatalogService::new(db)
        .create_course(CreateCourseParam {
            name: " English A1 ".to_string(),
            cost: 12000,
        })
        .await?;

    assert_eq!(course.name, "English A1");
    assert_eq!(course.sale, 0);
    assert_eq!(course.total_price, 12000);

    Ok(())
}

/// Tests applying a sale given as a negative percentage.
///
/// Expected: sale stored as absolute value and the total truncated
#[tokio::test]
async fn applies_sale_to_total_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;

    let updated = CatalogService::new(db)
        .update_course(UpdateCourseParam {
            id: course.id,
            name: "English B1".to_string(),
            cost: 999,
            sale: -15,
        })
        .await?
        .unwrap();

    assert_eq!(updated.sale, 15);
    assert_eq!(updated.total_price, 849);
    assert_eq!(updated.name, "English B1");

    Ok(())
}

/// Tests invalid course input.
///
/// Expected: BadRequest for an empty name and a sale above 100, Ok(None) for unknown id
#[tokio::test]
async fn rejects_invalid_course_input() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;
    let service = CatalogService::new(db);

    let empty_name = service
        .create_course(CreateCourseParam {
            name: "  ".to_string(),
            cost: 100,
        })
        .await;
    let big_sale = service
        .update_course(UpdateCourseParam {
            id: course.id,
            name: "Course".to_string(),
            cost: 100,
            sale: 120,
        })
        .await;
    let missing = service
        .update_course(UpdateCourseParam {
            id: course.id + 1000,
            name: "Course".to_string(),
            cost: 100,
            sale: 0,
        })
        .await?;

    assert!(matches!(empty_name, Err(AppError::BadRequest(_))));
    assert!(matches!(big_sale, Err(AppError::BadRequest(_))));
    assert!(missing.is_none());

    Ok(())
}

/// Tests a sale at the lower bound of i32.
///
/// Expected: BadRequest and the stored course untouched
#[tokio::test]
async fn rejects_minimum_integer_sale() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let course = factory::course::create_course(db).await?;
    let service = CatalogService::new(db);

    let result = service
        .update_course(UpdateCourseParam {
            id: course.id,
            name: "Course".to_string(),
            cost: 1000,
            sale: i32::MIN,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = service.get_course(course.id).await?.unwrap();
    assert_eq!(stored.sale, course.sale);
    assert_eq!(stored.total_price, course.total_price);

    Ok(())
}
