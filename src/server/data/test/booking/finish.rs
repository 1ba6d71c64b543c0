use super::*;

/// Tests completing an active booking.
///
/// Expected: Ok(Some) with status `COMPLETED` and the end time set
#[tokio::test]
async fn completes_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, booking) = create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let finished = repo
        .finish(booking.id, user.id, BookingStatus::Completed, Utc::now())
        .await?
        .unwrap();

    assert_eq!(finished.status, BookingStatus::Completed);
    assert!(finished.end_time.is_some());
    assert_eq!(finished.user_id, user.id);

    Ok(())
}

/// Tests that a terminal booking never transitions again.
///
/// Expected: Ok(None) for a second completion and for a cancellation afterwards
#[tokio::test]
async fn second_transition_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, booking) = create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    assert!(repo
        .finish(booking.id, user.id, BookingStatus::Cancelled, Utc::now())
        .await?
        .is_some());
    assert!(repo
        .finish(booking.id, user.id, BookingStatus::Cancelled, Utc::now())
        .await?
        .is_none());
    assert!(repo
        .finish(booking.id, user.id, BookingStatus::Completed, Utc::now())
        .await?
        .is_none());

    Ok(())
}

/// Tests finishing somebody else's booking.
///
/// Expected: Ok(None) and the booking still `ACTIVE`
#[tokio::test]
async fn ignores_other_users_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, booking) = create_booking_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    assert!(repo
        .finish(booking.id, stranger.id, BookingStatus::Completed, Utc::now())
        .await?
        .is_none());

    let stored = repo.find_for_user(booking.id, user.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Active);

    Ok(())
}
