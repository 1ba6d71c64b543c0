use super::*;

/// Tests recording a trip for a booking.
///
/// Expected: Ok with duration derived from the times and no distance
#[tokio::test]
async fn records_trip_with_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle, booking) = create_booking_with_dependencies(db).await?;
    let end_time = Utc::now();

    let repo = TripRepository::new(db);
    let trip = repo
        .create(CreateTripParam {
            user_id: user.id,
            vehicle_id: vehicle.id,
            booking_id: booking.id,
            start_time: end_time - Duration::minutes(95),
            end_time,
            cost: booking.total_price,
        })
        .await?;

    assert_eq!(trip.duration_minutes, 95);
    assert_eq!(trip.cost, booking.total_price);
    assert!(trip.distance_km.is_none());

    Ok(())
}

/// Tests that a booking has at most one trip.
///
/// Expected: Err with a unique constraint violation on the second insert
#[tokio::test]
async fn rejects_second_trip_for_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle, booking) = create_booking_with_dependencies(db).await?;
    let param = CreateTripParam {
        user_id: user.id,
        vehicle_id: vehicle.id,
        booking_id: booking.id,
        start_time: booking.start_time,
        end_time: Utc::now(),
        cost: booking.total_price,
    };

    let repo = TripRepository::new(db);
    repo.create(param.clone()).await?;
    let err = repo.create(param).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
