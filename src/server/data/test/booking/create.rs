use super::*;

/// Tests creating a booking.
///
/// Expected: Ok with status `ACTIVE`, no end time and the requested plan and price
#[tokio::test]
async fn creates_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParam {
            user_id: user.id,
            vehicle_id: vehicle.id,
            pricing_plan: PricingPlan::Day,
            total_price: 80.0,
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Active);
    assert_eq!(booking.pricing_plan, PricingPlan::Day);
    assert_eq!(booking.total_price, 80.0);
    assert!(booking.end_time.is_none());
    assert!(booking.vehicle.is_none());

    Ok(())
}

/// Tests fetching a booking for its owner.
///
/// Expected: Ok(Some) with vehicle and user joined for the owner, Ok(None) for
/// anybody else
#[tokio::test]
async fn finds_booking_only_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle, booking) = create_booking_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_for_user(booking.id, user.id).await?.unwrap();

    assert_eq!(found.vehicle.as_ref().map(|v| v.id), Some(vehicle.id));
    assert_eq!(found.user.as_ref().map(|u| u.email.as_str()), Some(user.email.as_str()));
    assert!(repo.find_for_user(booking.id, stranger.id).await?.is_none());

    Ok(())
}
