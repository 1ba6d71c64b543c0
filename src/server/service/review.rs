//! Review creation and listing.
//!
//! A review and the vehicle's running mean are written in one transaction, so the
//! stored rating always reflects every committed review.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{review::ReviewRepository, vehicle::VehicleRepository},
    error::AppError,
    model::review::{CreateReviewParam, Review, MAX_RATING, MIN_RATING},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review and folds its rating into the vehicle's mean.
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review
    /// - `Err(AppError::BadRequest)` - Rating missing or outside 1..=5; nothing is written
    /// - `Err(AppError::NotFound)` - Vehicle does not exist
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, AppError> {
        let rating = match param.rating {
            Some(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => rating,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Rating must be between {} and {}",
                    MIN_RATING, MAX_RATING
                )))
            }
        };

        let txn = self.db.begin().await?;

        if !VehicleRepository::new(&txn)
            .apply_rating(param.vehicle_id, rating)
            .await?
        {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        let review = ReviewRepository::new(&txn)
            .create(param.user_id, param.vehicle_id, rating, param.comment)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "User {} rated vehicle {} with {}",
            param.user_id,
            param.vehicle_id,
            rating
        );

        Ok(review)
    }

    /// Lists a vehicle's reviews with reviewer names, newest first.
    pub async fn list_for_vehicle(&self, vehicle_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .get_by_vehicle(vehicle_id, None)
            .await?)
    }
}
