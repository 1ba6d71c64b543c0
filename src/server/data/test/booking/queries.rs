use super::*;

/// Tests listing a user's bookings.
///
/// Expected: Ok with only that user's bookings, newest first, each with its vehicle
#[tokio::test]
async fn lists_user_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let older = BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Completed)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = BookingFactory::new(db, user.id, vehicle.id).build().await?;
    BookingFactory::new(db, other.id, vehicle.id).build().await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_user(user.id, None).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, newer.id);
    assert_eq!(bookings[1].id, older.id);
    assert!(bookings.iter().all(|b| b.vehicle.is_some()));

    let limited = repo.get_by_user(user.id, Some(1)).await?;
    assert_eq!(limited.len(), 1);

    Ok(())
}

/// Tests the admin booking listing with a status filter.
///
/// Expected: Ok with only active bookings, each joined with user and vehicle
#[tokio::test]
async fn paginates_by_status_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    for _ in 0..3 {
        BookingFactory::new(db, user.id, vehicle.id).build().await?;
    }
    BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let page = repo
        .get_paginated(Some(BookingStatus::Active), PageParam { page: 1, limit: 2 })
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.pages, 2);
    assert_eq!(page.items.len(), 2);
    assert!(page
        .items
        .iter()
        .all(|b| b.status == BookingStatus::Active && b.user.is_some() && b.vehicle.is_some()));

    let all = repo.get_paginated(None, PageParam { page: 1, limit: 20 }).await?;
    assert_eq!(all.total, 4);

    Ok(())
}
