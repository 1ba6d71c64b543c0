use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::trip::{CreateTripParam, Trip};

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the trip for a completed booking. Distance is not tracked.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip
    /// - `Err(DbErr)` - Database error, including a unique violation when the booking
    ///   already has a trip
    pub async fn create(&self, param: CreateTripParam) -> Result<Trip, DbErr> {
        let duration_minutes = param.duration_minutes();
        let entity = entity::trip::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            vehicle_id: ActiveValue::Set(param.vehicle_id),
            booking_id: ActiveValue::Set(param.booking_id),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            duration_minutes: ActiveValue::Set(duration_minutes),
            cost: ActiveValue::Set(param.cost),
            distance_km: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trip::from_entity(entity))
    }

    /// Gets a user's trips with their vehicles, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Traveller
    /// - `limit` - Maximum number of trips, all when `None`
    pub async fn get_by_user(&self, user_id: i32, limit: Option<u64>) -> Result<Vec<Trip>, DbErr> {
        let rows = entity::prelude::Trip::find()
            .filter(entity::trip::Column::UserId.eq(user_id))
            .order_by_desc(entity::trip::Column::CreatedAt)
            .order_by_desc(entity::trip::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(trip, vehicle)| Trip::from_entity(trip).with_vehicle(vehicle))
            .collect())
    }

    /// Counts trips per user for the given users. Users without trips are absent.
    pub async fn count_by_users(&self, user_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        self.count_grouped(entity::trip::Column::UserId, user_ids)
            .await
    }

    /// Counts trips per vehicle for the given vehicles. Vehicles without trips are absent.
    pub async fn count_by_vehicles(
        &self,
        vehicle_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        self.count_grouped(entity::trip::Column::VehicleId, vehicle_ids)
            .await
    }

    async fn count_grouped(
        &self,
        column: entity::trip::Column,
        ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Trip::find()
            .select_only()
            .column(column)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(column.is_in(ids.iter().copied()))
            .group_by(column)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count.max(0) as u64))
            .collect())
    }
}
