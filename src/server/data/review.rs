use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::review::Review;

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review. The rating must already be validated.
    pub async fn create(
        &self,
        user_id: i32,
        vehicle_id: i32,
        rating: i32,
        comment: Option<String>,
    ) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            rating: ActiveValue::Set(rating),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Gets reviews of a vehicle with the reviewer's name, newest first.
    ///
    /// # Arguments
    /// - `vehicle_id` - Reviewed vehicle
    /// - `limit` - Maximum number of reviews, all when `None`
    pub async fn get_by_vehicle(
        &self,
        vehicle_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<Review>, DbErr> {
        let rows = entity::prelude::Review::find()
            .filter(entity::review::Column::VehicleId.eq(vehicle_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(review, user)| Review::from_entity(review).with_author(user))
            .collect())
    }

    /// Gets reviews written by a user with the reviewed vehicle, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Review>, DbErr> {
        let rows = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(review, vehicle)| Review::from_entity(review).with_vehicle(vehicle))
            .collect())
    }
}
