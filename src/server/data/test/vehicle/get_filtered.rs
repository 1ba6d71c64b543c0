use super::*;

/// Tests that the public listing hides soft-deleted vehicles.
///
/// Expected: Ok with only active vehicles counted and returned
#[tokio::test]
async fn excludes_inactive_when_active_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_vehicle(db).await?;
    factory::vehicle::VehicleFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let page = repo
        .get_filtered(
            &VehicleFilter {
                active_only: true,
                ..Default::default()
            },
            PageParam { page: 1, limit: 50 },
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, active.id);

    let all = repo
        .get_filtered(&VehicleFilter::default(), PageParam { page: 1, limit: 50 })
        .await?;
    assert_eq!(all.total, 2);

    Ok(())
}

/// Tests filtering by city and status together.
///
/// Expected: Ok with the single available Brno vehicle
#[tokio::test]
async fn filters_by_city_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::vehicle::VehicleFactory::new(db)
        .city("Brno")
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db)
        .city("Brno")
        .status(VehicleStatus::Charging)
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db)
        .city("Prague")
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let page = repo
        .get_filtered(
            &VehicleFilter {
                city: Some("Brno".to_string()),
                status: Some(VehicleStatus::Available),
                active_only: true,
            },
            PageParam { page: 1, limit: 50 },
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, target.id);

    Ok(())
}

/// Tests the page size bound.
///
/// Expected: Ok with at most `limit` items and `pages == ceil(total / limit)`
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..7 {
        factory::create_vehicle(db).await?;
    }

    let repo = VehicleRepository::new(db);
    let page = repo
        .get_filtered(&VehicleFilter::default(), PageParam { page: 2, limit: 3 })
        .await?;

    assert_eq!(page.total, 7);
    assert_eq!(page.pages, 3);
    assert_eq!(page.items.len(), 3);

    Ok(())
}

/// Tests that listings put the most recently added vehicles first.
///
/// Expected: Ok with ids in reverse insertion order
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_vehicle(db).await?;
    let second = factory::create_vehicle(db).await?;
    let third = factory::create_vehicle(db).await?;

    let page = VehicleRepository::new(db)
        .get_filtered(&VehicleFilter::default(), PageParam { page: 1, limit: 50 })
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    Ok(())
}
