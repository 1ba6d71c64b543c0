use super::*;

/// Tests reserving an available vehicle.
///
/// Expected: Ok(true) on the first call, Ok(false) on the second, status `BOOKED`
#[tokio::test]
async fn reserves_available_vehicle_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let repo = VehicleRepository::new(db);

    assert!(repo.try_reserve(vehicle.id).await?);
    assert!(!repo.try_reserve(vehicle.id).await?);

    let stored = repo.find_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.status, VehicleStatus::Booked);

    Ok(())
}

/// Tests reserving vehicles that are not available.
///
/// Verifies maintenance, charging and deactivated vehicles are never reserved and
/// keep their state.
///
/// Expected: Ok(false) and unchanged status for each
#[tokio::test]
async fn refuses_unavailable_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let maintenance = factory::vehicle::VehicleFactory::new(db)
        .status(VehicleStatus::Maintenance)
        .build()
        .await?;
    let charging = factory::vehicle::VehicleFactory::new(db)
        .status(VehicleStatus::Charging)
        .build()
        .await?;
    let inactive = factory::vehicle::VehicleFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    assert!(!repo.try_reserve(maintenance.id).await?);
    assert!(!repo.try_reserve(charging.id).await?);
    assert!(!repo.try_reserve(inactive.id).await?);
    assert!(!repo.try_reserve(999).await?);

    let stored = repo.find_by_id(maintenance.id).await?.unwrap();
    assert_eq!(stored.status, VehicleStatus::Maintenance);
    let stored = repo.find_by_id(inactive.id).await?.unwrap();
    assert_eq!(stored.status, VehicleStatus::Available);

    Ok(())
}

/// Tests releasing a booked vehicle.
///
/// Expected: Ok(true) and status `AVAILABLE`; releasing again is Ok(false)
#[tokio::test]
async fn releases_booked_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .status(VehicleStatus::Booked)
        .build()
        .await?;
    let repo = VehicleRepository::new(db);

    assert!(repo.release(vehicle.id).await?);
    assert!(!repo.release(vehicle.id).await?);

    let stored = repo.find_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.status, VehicleStatus::Available);

    Ok(())
}

/// Tests manual status changes around a booking.
///
/// Expected: Ok(false) while booked, Ok(true) otherwise
#[tokio::test]
async fn manual_status_skips_booked_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booked = factory::vehicle::VehicleFactory::new(db)
        .status(VehicleStatus::Booked)
        .build()
        .await?;
    let available = factory::create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    assert!(
        !repo
            .set_status_unless_booked(booked.id, VehicleStatus::Maintenance)
            .await?
    );
    assert!(
        repo.set_status_unless_booked(available.id, VehicleStatus::Charging)
            .await?
    );

    let stored = repo.find_by_id(available.id).await?.unwrap();
    assert_eq!(stored.status, VehicleStatus::Charging);

    Ok(())
}
