//! Trip factory for creating test trip entities.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a 30 minute trip for an existing booking.
///
/// # Arguments
/// - `db` - Database connection
/// - `booking` - The booking the trip was produced by
///
/// # Returns
/// - `Ok(entity::trip::Model)` - Created trip entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_trip(
    db: &DatabaseConnection,
    booking: &entity::booking::Model,
) -> Result<entity::trip::Model, DbErr> {
    let end_time = Utc::now();
    let start_time = end_time - Duration::minutes(30);

    entity::trip::ActiveModel {
        user_id: ActiveValue::Set(booking.user_id),
        vehicle_id: ActiveValue::Set(booking.vehicle_id),
        booking_id: ActiveValue::Set(booking.id),
        start_time: ActiveValue::Set(start_time),
        end_time: ActiveValue::Set(end_time),
        duration_minutes: ActiveValue::Set(30),
        cost: ActiveValue::Set(booking.total_price),
        distance_km: ActiveValue::Set(Some(12.5)),
        created_at: ActiveValue::Set(end_time),
        ..Default::default()
    }
    .insert(db)
    .await
}
