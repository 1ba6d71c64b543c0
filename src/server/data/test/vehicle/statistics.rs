use super::*;

/// Tests counting active vehicles per city.
///
/// Expected: Ok with Prague (2) before Brno (1) and the inactive vehicle ignored
#[tokio::test]
async fn counts_active_vehicles_by_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::VehicleFactory::new(db).city("Prague").build().await?;
    factory::vehicle::VehicleFactory::new(db).city("Prague").build().await?;
    factory::vehicle::VehicleFactory::new(db).city("Brno").build().await?;
    factory::vehicle::VehicleFactory::new(db)
        .city("Brno")
        .active(false)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let stats = repo.count_by_city().await?;

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].city, "Prague");
    assert_eq!(stats[0].count, 2);
    assert_eq!(stats[1].city, "Brno");
    assert_eq!(stats[1].count, 1);
    assert_eq!(repo.count_active().await?, 3);

    Ok(())
}

/// Tests ordering by completed trips.
///
/// Expected: Ok with the most travelled vehicle first
#[tokio::test]
async fn orders_popular_vehicles_by_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::VehicleFactory::new(db).total_trips(3).build().await?;
    let top = factory::vehicle::VehicleFactory::new(db)
        .total_trips(12)
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db).total_trips(7).build().await?;

    let repo = VehicleRepository::new(db);
    let popular = repo.most_popular(10).await?;

    assert_eq!(popular.len(), 3);
    assert_eq!(popular[0].id, top.id);
    assert_eq!(popular[2].total_trips, 3);

    Ok(())
}
