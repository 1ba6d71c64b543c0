use super::*;

/// Tests revenue and status counts.
///
/// Expected: Ok with revenue summed over completed bookings only
#[tokio::test]
async fn sums_completed_revenue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    assert_eq!(repo.revenue_total().await?, 0.0);

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Completed)
        .total_price(40.0)
        .build()
        .await?;
    BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Completed)
        .total_price(12.5)
        .build()
        .await?;
    BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Cancelled)
        .total_price(99.0)
        .build()
        .await?;
    BookingFactory::new(db, user.id, vehicle.id).build().await?;

    assert!((repo.revenue_total().await? - 52.5).abs() < 1e-9);
    assert_eq!(repo.count_by_status(BookingStatus::Active).await?, 1);
    assert_eq!(repo.count_by_status(BookingStatus::Completed).await?, 2);

    Ok(())
}

/// Tests grouping booking counts by user and vehicle.
///
/// Expected: Ok with counts for users that have bookings and no entry otherwise
#[tokio::test]
async fn counts_bookings_per_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::create_user(db).await?;
    let idle = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    BookingFactory::new(db, busy.id, vehicle.id).build().await?;
    BookingFactory::new(db, busy.id, vehicle.id).build().await?;

    let repo = BookingRepository::new(db);
    let by_user = repo.count_by_users(&[busy.id, idle.id]).await?;
    assert_eq!(by_user.get(&busy.id), Some(&2));
    assert_eq!(by_user.get(&idle.id), None);

    let by_vehicle = repo.count_by_vehicles(&[vehicle.id]).await?;
    assert_eq!(by_vehicle.get(&vehicle.id), Some(&2));

    assert!(repo.count_by_users(&[]).await?.is_empty());

    Ok(())
}

/// Tests selecting completed bookings inside a time window.
///
/// Expected: Ok with the recent completed booking and not the old one
#[tokio::test]
async fn selects_completed_since() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Completed)
        .created_at(Utc::now() - Duration::days(45))
        .build()
        .await?;
    let recent = BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Completed)
        .created_at(Utc::now() - Duration::days(3))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .completed_since(Utc::now() - Duration::days(30))
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, recent.id);

    Ok(())
}
