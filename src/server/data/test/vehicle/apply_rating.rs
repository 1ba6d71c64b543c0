use super::*;

/// Tests the running mean over several ratings.
///
/// Expected: Ok with rating equal to the arithmetic mean of 5, 4, 2 and 4
#[tokio::test]
async fn keeps_arithmetic_mean() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let repo = VehicleRepository::new(db);

    for rating in [5, 4, 2, 4] {
        assert!(repo.apply_rating(vehicle.id, rating).await?);
    }

    let stored = repo.find_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.review_count, 4);
    assert!((stored.rating - 3.75).abs() < 1e-9);

    Ok(())
}

/// Tests folding a rating into an existing mean.
///
/// Expected: Ok with (4.0 * 3 + 1) / 4 = 3.25
#[tokio::test]
async fn extends_existing_mean() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .rating(4.0, 3)
        .build()
        .await?;
    let repo = VehicleRepository::new(db);

    repo.apply_rating(vehicle.id, 1).await?;

    let stored = repo.find_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.review_count, 4);
    assert!((stored.rating - 3.25).abs() < 1e-9);

    Ok(())
}

/// Tests rating a vehicle that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    assert!(!repo.apply_rating(42, 5).await?);

    Ok(())
}
