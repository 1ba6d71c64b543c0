//! Shared helper utilities for factory methods.
//!
//! Provides the unique id counter used by every factory and convenience methods for
//! creating entities together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Emails and license plates carry unique constraints, so every factory-created
/// entity draws a fresh suffix from this counter.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active booking together with the user and vehicle it links.
///
/// The vehicle is created in the `BOOKED` state so the rows are consistent with
/// what the booking service would have written.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, vehicle, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::vehicle::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let vehicle = crate::factory::vehicle::VehicleFactory::new(db)
        .status(entity::vehicle::VehicleStatus::Booked)
        .build()
        .await?;
    let booking = crate::factory::booking::create_booking(db, user.id, vehicle.id).await?;

    Ok((user, vehicle, booking))
}
