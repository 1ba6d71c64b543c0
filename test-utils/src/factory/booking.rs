//! Booking factory for creating test booking entities.

use chrono::{DateTime, Utc};
use entity::booking::{BookingStatus, PricingPlan};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings.
///
/// The factory writes the booking row only; it does not touch the vehicle's
/// status, so callers decide which vehicle state the test starts from.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
    status: BookingStatus,
    pricing_plan: PricingPlan,
    total_price: f64,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory for an `ACTIVE` hourly booking priced at 15.0.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, vehicle_id: i32) -> Self {
        Self {
            db,
            user_id,
            vehicle_id,
            status: BookingStatus::Active,
            pricing_plan: PricingPlan::Hour,
            total_price: 15.0,
            created_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn pricing_plan(mut self, pricing_plan: PricingPlan) -> Self {
        self.pricing_plan = pricing_plan;
        self
    }

    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    /// Backdates the booking, used by reporting tests that bucket by day.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// Terminal bookings get an `end_time` equal to their creation time.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let end_time = match self.status {
            BookingStatus::Active => None,
            _ => Some(self.created_at),
        };

        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            status: ActiveValue::Set(self.status),
            pricing_plan: ActiveValue::Set(self.pricing_plan),
            total_price: ActiveValue::Set(self.total_price),
            start_time: ActiveValue::Set(self.created_at),
            end_time: ActiveValue::Set(end_time),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, vehicle_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_booking_with_dependencies};

    #[tokio::test]
    async fn creates_active_booking() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_rental_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, vehicle, booking) = create_booking_with_dependencies(db).await?;

        assert_eq!(booking.user_id, user.id);
        assert_eq!(booking.vehicle_id, vehicle.id);
        assert_eq!(booking.status, BookingStatus::Active);
        assert!(booking.end_time.is_none());

        Ok(())
    }
}
