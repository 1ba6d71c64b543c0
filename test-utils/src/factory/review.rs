//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a review row directly, without touching the vehicle's stored rating.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Author of the review
/// - `vehicle_id` - Reviewed vehicle
/// - `rating` - Star rating, not range checked here
///
/// # Returns
/// - `Ok(entity::review::Model)` - Created review entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(Some(format!("{} stars", rating))),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
