use super::*;

/// Tests inserting a review.
///
/// Expected: Ok with rating and comment stored
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(user.id, vehicle.id, 4, Some("Clean and quiet".to_string()))
        .await?;

    assert_eq!(review.rating, 4);
    assert_eq!(review.comment.as_deref(), Some("Clean and quiet"));
    assert_eq!(review.vehicle_id, vehicle.id);

    Ok(())
}
