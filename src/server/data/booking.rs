//! Booking data repository.
//!
//! Status changes on a booking are compare-and-swap updates guarded by
//! `status = 'ACTIVE'`; a booking that already reached a terminal status is never
//! matched again.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    booking::{Booking, CreateBookingParam},
    page::{PageParam, Paginated},
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking in `ACTIVE` status starting now.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking without joined relations
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            vehicle_id: ActiveValue::Set(param.vehicle_id),
            status: ActiveValue::Set(BookingStatus::Active),
            pricing_plan: ActiveValue::Set(param.pricing_plan),
            total_price: ActiveValue::Set(param.total_price),
            start_time: ActiveValue::Set(now),
            end_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a booking owned by the user, joined with its vehicle and owner.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found and owned by `user_id`
    /// - `Ok(None)` - No such booking for this user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_user(&self, id: i32, user_id: i32) -> Result<Option<Booking>, DbErr> {
        let Some((booking, vehicle)) = entity::prelude::Booking::find_by_id(id)
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Vehicle)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let user = entity::prelude::User::find_by_id(booking.user_id)
            .one(self.db)
            .await?;

        Ok(Some(
            Booking::from_entity(booking)
                .with_vehicle(vehicle)
                .with_user(user),
        ))
    }

    /// Finds a booking with its vehicle, regardless of owner.
    pub async fn find_with_vehicle(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Vehicle)
            .one(self.db)
            .await?;

        Ok(booking.map(|(booking, vehicle)| Booking::from_entity(booking).with_vehicle(vehicle)))
    }

    /// Gets a user's bookings with their vehicles, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the bookings
    /// - `limit` - Maximum number of bookings, all when `None`
    pub async fn get_by_user(
        &self,
        user_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<Booking>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(booking, vehicle)| Booking::from_entity(booking).with_vehicle(vehicle))
            .collect())
    }

    /// Moves an active booking owned by `user_id` to a terminal status.
    ///
    /// The update matches only `ACTIVE` rows, so of several concurrent or repeated
    /// calls exactly one succeeds.
    ///
    /// # Arguments
    /// - `id` - Booking id
    /// - `user_id` - Required owner
    /// - `status` - `COMPLETED` or `CANCELLED`
    /// - `end_time` - Timestamp recorded as the booking's end
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The booking after the transition, without relations
    /// - `Ok(None)` - No active booking with that id for this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn finish(
        &self,
        id: i32,
        user_id: i32,
        status: BookingStatus,
        end_time: DateTime<Utc>,
    ) -> Result<Option<Booking>, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::Status, Expr::value(status))
            .col_expr(entity::booking::Column::EndTime, Expr::value(Some(end_time)))
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets a page of bookings across all users, newest first, with vehicle and user.
    pub async fn get_paginated(
        &self,
        status: Option<BookingStatus>,
        page: PageParam,
    ) -> Result<Paginated<Booking>, DbErr> {
        let mut query = entity::prelude::Booking::find();
        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .find_also_related(entity::prelude::Vehicle)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;
        let bookings = self.attach_users(rows).await?;

        Ok(Paginated::new(bookings, total, page))
    }

    /// Gets the most recently created bookings with vehicle and user.
    pub async fn recent(&self, limit: u64) -> Result<Vec<Booking>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        self.attach_users(rows).await
    }

    async fn attach_users(
        &self,
        rows: Vec<(entity::booking::Model, Option<entity::vehicle::Model>)>,
    ) -> Result<Vec<Booking>, DbErr> {
        let user_ids: Vec<i32> = rows.iter().map(|(b, _)| b.user_id).collect();

        let users: HashMap<i32, entity::user::Model> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|(booking, vehicle)| {
                let user = users.get(&booking.user_id).cloned();
                Booking::from_entity(booking)
                    .with_vehicle(vehicle)
                    .with_user(user)
            })
            .collect())
    }

    /// Counts bookings in the given status.
    pub async fn count_by_status(&self, status: BookingStatus) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Sums `total_price` over completed bookings; 0 when there are none.
    pub async fn revenue_total(&self) -> Result<f64, DbErr> {
        let total: Option<Option<f64>> = entity::prelude::Booking::find()
            .select_only()
            .column_as(Expr::cust("SUM(total_price)"), "total")
            .filter(entity::booking::Column::Status.eq(BookingStatus::Completed))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// Gets completed bookings created at or after `since`, oldest first.
    pub async fn completed_since(&self, since: DateTime<Utc>) -> Result<Vec<Booking>, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Completed))
            .filter(entity::booking::Column::CreatedAt.gte(since))
            .order_by_asc(entity::booking::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Counts bookings per user for the given users. Users without bookings are absent.
    pub async fn count_by_users(&self, user_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        self.count_grouped(entity::booking::Column::UserId, user_ids)
            .await
    }

    /// Counts bookings per vehicle for the given vehicles. Vehicles without bookings are absent.
    pub async fn count_by_vehicles(
        &self,
        vehicle_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        self.count_grouped(entity::booking::Column::VehicleId, vehicle_ids)
            .await
    }

    async fn count_grouped(
        &self,
        column: entity::booking::Column,
        ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Booking::find()
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
