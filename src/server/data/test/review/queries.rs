use super::*;

/// Tests listing reviews of a vehicle.
///
/// Expected: Ok with reviewer names attached and the limit applied
#[tokio::test]
async fn lists_vehicle_reviews_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Lucie Horakova")
        .build()
        .await?;
    let vehicle = factory::create_vehicle(db).await?;
    let other_vehicle = factory::create_vehicle(db).await?;
    for rating in [5, 3, 4] {
        factory::create_review(db, user.id, vehicle.id, rating).await?;
    }
    factory::create_review(db, user.id, other_vehicle.id, 1).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_vehicle(vehicle.id, None).await?;

    assert_eq!(reviews.len(), 3);
    assert!(reviews
        .iter()
        .all(|r| r.author.as_deref() == Some("Lucie Horakova")));

    let limited = repo.get_by_vehicle(vehicle.id, Some(2)).await?;
    assert_eq!(limited.len(), 2);

    Ok(())
}

/// Tests listing reviews written by a user.
///
/// Expected: Ok with the reviewed vehicle attached
#[tokio::test]
async fn lists_user_reviews_with_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::create_review(db, user.id, vehicle.id, 5).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_user(user.id).await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].vehicle.as_ref().map(|v| v.id), Some(vehicle.id));

    Ok(())
}
