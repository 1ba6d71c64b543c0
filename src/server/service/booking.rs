//! Booking lifecycle.
//!
//! A booking is created `ACTIVE` and ends exactly once as `COMPLETED` or
//! `CANCELLED`. Each transition runs in a single transaction together with the
//! paired vehicle status change:
//!
//! - create: vehicle `AVAILABLE` -> `BOOKED`, booking inserted
//! - complete: booking -> `COMPLETED`, vehicle -> `AVAILABLE`, vehicle and user
//!   totals incremented, trip recorded
//! - cancel: booking -> `CANCELLED`, vehicle -> `AVAILABLE`
//!
//! Both sides are compare-and-swap updates, so concurrent requests cannot book the
//! same vehicle twice or finish the same booking twice.

use chrono::Utc;
use entity::booking::BookingStatus;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, trip::TripRepository, user::UserRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::{
        booking::{Booking, CreateBookingParam},
        page::{PageParam, Paginated},
        trip::CreateTripParam,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a vehicle for the user.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The active booking with its vehicle
    /// - `Err(AppError::BadRequest)` - Price is negative or not a number
    /// - `Err(AppError::NotFound)` - Vehicle does not exist
    /// - `Err(AppError::Conflict)` - Vehicle is not available; nothing is written
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        if !param.total_price.is_finite() || param.total_price < 0.0 {
            return Err(AppError::BadRequest(
                "Total price must be a non-negative number".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let vehicle_repo = VehicleRepository::new(&txn);

        if !vehicle_repo.try_reserve(param.vehicle_id).await? {
            return match vehicle_repo.find_by_id(param.vehicle_id).await? {
                None => Err(AppError::NotFound("Vehicle not found".to_string())),
                Some(_) => Err(AppError::Conflict("Vehicle not available".to_string())),
            };
        }

        let booking_repo = BookingRepository::new(&txn);
        let created = booking_repo.create(param).await?;
        let booking = reload(&booking_repo, created.id).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} booked vehicle {} (booking {})",
            booking.user_id,
            booking.vehicle_id,
            booking.id
        );

        Ok(booking)
    }

    /// Lists the user's bookings with vehicles, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db)
            .get_by_user(user_id, None)
            .await?)
    }

    /// Gets one of the user's bookings with vehicle and owner.
    ///
    /// Bookings of other users are reported as missing.
    pub async fn get_for_user(&self, id: i32, user_id: i32) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    /// Completes an active booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The completed booking with its vehicle
    /// - `Err(AppError::NotFound)` - No active booking with that id for this user,
    ///   including one that was already completed or cancelled
    pub async fn complete(&self, id: i32, user_id: i32) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;
        let end_time = Utc::now();

        let booking_repo = BookingRepository::new(&txn);
        let booking = finish(&booking_repo, id, user_id, BookingStatus::Completed, end_time).await?;

        release_vehicle(&txn, booking.vehicle_id).await?;

        VehicleRepository::new(&txn)
            .increment_trips(booking.vehicle_id)
            .await?;
        UserRepository::new(&txn)
            .record_trip(user_id, booking.total_price)
            .await?;
        TripRepository::new(&txn)
            .create(CreateTripParam {
                user_id,
                vehicle_id: booking.vehicle_id,
                booking_id: booking.id,
                start_time: booking.start_time,
                end_time,
                cost: booking.total_price,
            })
            .await?;

        let booking = reload(&booking_repo, id).await?;

        txn.commit().await?;

        tracing::info!("User {} completed booking {}", user_id, id);

        Ok(booking)
    }

    /// Cancels an active booking and frees its vehicle.
    ///
    /// # Returns
    /// - `Ok(())` - Booking cancelled
    /// - `Err(AppError::NotFound)` - No active booking with that id for this user
    pub async fn cancel(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let booking_repo = BookingRepository::new(&txn);
        let booking =
            finish(&booking_repo, id, user_id, BookingStatus::Cancelled, Utc::now()).await?;

        release_vehicle(&txn, booking.vehicle_id).await?;

        txn.commit().await?;

        tracing::info!("User {} cancelled booking {}", user_id, id);

        Ok(())
    }

    /// Lists bookings of all users for the admin panel.
    pub async fn list_all(
        &self,
        status: Option<BookingStatus>,
        page: PageParam,
    ) -> Result<Paginated<Booking>, AppError> {
        Ok(BookingRepository::new(self.db)
            .get_paginated(status, page)
            .await?)
    }
}

async fn finish(
    repo: &BookingRepository<'_, DatabaseTransaction>,
    id: i32,
    user_id: i32,
    status: BookingStatus,
    end_time: chrono::DateTime<Utc>,
) -> Result<Booking, AppError> {
    repo.finish(id, user_id, status, end_time)
        .await?
        .ok_or_else(|| AppError::NotFound("Active booking not found".to_string()))
}

/// Returns the vehicle to `AVAILABLE`. A vehicle that is no longer `BOOKED` (for
/// example after an admin edit) is left as it is.
async fn release_vehicle(txn: &DatabaseTransaction, vehicle_id: i32) -> Result<(), AppError> {
    if !VehicleRepository::new(txn).release(vehicle_id).await? {
        tracing::warn!(
            "Vehicle {} was not BOOKED when its booking ended; status left unchanged",
            vehicle_id
        );
    }
    Ok(())
}

async fn reload(
    repo: &BookingRepository<'_, DatabaseTransaction>,
    id: i32,
) -> Result<Booking, AppError> {
    repo.find_with_vehicle(id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Booking {} vanished mid-transaction", id)))
}
