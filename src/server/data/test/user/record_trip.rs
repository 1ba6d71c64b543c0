use super::*;

/// Tests adding completed trips to a user's totals.
///
/// Verifies that each call increments `total_trips` by one and `total_spent` by the
/// given amount, starting from existing values.
///
/// Expected: Ok with totals 3 trips and 60.5 spent
#[tokio::test]
async fn increments_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .total_trips(1)
        .total_spent(20.0)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.record_trip(user.id, 15.5).await?;
    repo.record_trip(user.id, 25.0).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.total_trips, 3);
    assert!((stored.total_spent - 60.5).abs() < 1e-9);

    Ok(())
}

/// Tests that other users are untouched.
///
/// Expected: Ok with the second user's totals still zero
#[tokio::test]
async fn leaves_other_users_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.record_trip(user.id, 10.0).await?;

    let other = repo.find_by_id(other.id).await?.unwrap();
    assert_eq!(other.total_trips, 0);
    assert_eq!(other.total_spent, 0.0);

    Ok(())
}
