use super::*;

/// Tests creating a vehicle.
///
/// Expected: Ok with rating, review count and trips at zero and the vehicle active
#[tokio::test]
async fn creates_vehicle_with_zeroed_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let vehicle = repo.create(create_param("PRG-TS-001")).await?;

    assert_eq!(vehicle.license_plate, "PRG-TS-001");
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert!(vehicle.is_active);
    assert_eq!(vehicle.rating, 0.0);
    assert_eq!(vehicle.review_count, 0);
    assert_eq!(vehicle.total_trips, 0);

    Ok(())
}

/// Tests upserting by license plate.
///
/// Verifies a second upsert refreshes prices on the existing row and does not
/// reset its operational status.
///
/// Expected: Ok with one row carrying the new price and the stored status
#[tokio::test]
async fn upsert_keeps_operational_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let first = repo.upsert_by_plate(create_param("KV-VW-001")).await?;
    repo.set_status_unless_booked(first.id, VehicleStatus::Maintenance)
        .await?;

    let second = repo
        .upsert_by_plate(CreateVehicleParam {
            price_per_hour: 11.0,
            ..create_param("KV-VW-001")
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.price_per_hour, 11.0);
    assert_eq!(second.status, VehicleStatus::Maintenance);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests a partial update and soft delete.
///
/// Expected: Ok with only the city changed, then `is_active` false while the row
/// can still be fetched by id
#[tokio::test]
async fn updates_and_deactivates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let repo = VehicleRepository::new(db);

    let updated = repo
        .update(
            vehicle.id,
            UpdateVehicleParam {
                city: Some("Brno".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.city, "Brno");
    assert_eq!(updated.name, vehicle.name);

    assert!(repo.deactivate(vehicle.id).await?);
    let stored = repo.find_by_id(vehicle.id).await?.unwrap();
    assert!(!stored.is_active);

    assert!(!repo.deactivate(999).await?);
    assert!(repo
        .update(999, UpdateVehicleParam::default())
        .await?
        .is_none());

    Ok(())
}

/// Tests moving a vehicle.
///
/// Expected: Ok with both coordinates replaced
#[tokio::test]
async fn updates_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let repo = VehicleRepository::new(db);

    let moved = repo
        .update_location(vehicle.id, 49.1951, 16.6068)
        .await?
        .unwrap();

    assert_eq!(moved.latitude, 49.1951);
    assert_eq!(moved.longitude, 16.6068);

    Ok(())
}
