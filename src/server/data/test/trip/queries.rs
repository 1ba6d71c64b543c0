use super::*;

/// Tests listing a user's trips.
///
/// Expected: Ok with the user's trip joined with its vehicle and nothing for others
#[tokio::test]
async fn lists_trips_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle, booking) = create_booking_with_dependencies(db).await?;
    factory::create_trip(db, &booking).await?;
    let other = factory::create_user(db).await?;

    let repo = TripRepository::new(db);
    let trips = repo.get_by_user(user.id, None).await?;

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].vehicle.as_ref().map(|v| v.id), Some(vehicle.id));
    assert!(repo.get_by_user(other.id, None).await?.is_empty());

    let by_user = repo.count_by_users(&[user.id, other.id]).await?;
    assert_eq!(by_user.get(&user.id), Some(&1));
    assert_eq!(by_user.get(&other.id), None);

    let by_vehicle = repo.count_by_vehicles(&[vehicle.id]).await?;
    assert_eq!(by_vehicle.get(&vehicle.id), Some(&1));

    Ok(())
}
