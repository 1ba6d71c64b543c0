//! Booking domain models and parameters.

use chrono::{DateTime, Utc};
use entity::booking::{BookingStatus, PricingPlan};

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::model::{user::UserSummary, vehicle::Vehicle},
};

/// A rental of one vehicle by one user.
///
/// `vehicle` and `user` are populated only by queries that join them.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub status: BookingStatus,
    pub pricing_plan: PricingPlan,
    pub total_price: f64,
    pub start_time: DateTime<Utc>,
    /// Set when the booking reaches a terminal status.
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub vehicle: Option<Vehicle>,
    pub user: Option<UserSummary>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            vehicle_id: self.vehicle_id,
            status: self.status,
            pricing_plan: self.pricing_plan,
            total_price: self.total_price,
            start_time: self.start_time,
            end_time: self.end_time,
            created_at: self.created_at,
            vehicle: self.vehicle.map(Vehicle::into_dto),
            user: self.user.map(UserSummary::into_dto),
        }
    }

    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            vehicle_id: entity.vehicle_id,
            status: entity.status,
            pricing_plan: entity.pricing_plan,
            total_price: entity.total_price,
            start_time: entity.start_time,
            end_time: entity.end_time,
            created_at: entity.created_at,
            vehicle: None,
            user: None,
        }
    }

    pub fn with_vehicle(mut self, vehicle: Option<entity::vehicle::Model>) -> Self {
        self.vehicle = vehicle.map(Vehicle::from_entity);
        self
    }

    pub fn with_user(mut self, user: Option<entity::user::Model>) -> Self {
        self.user = user.map(UserSummary::from_entity);
        self
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub user_id: i32,
    pub vehicle_id: i32,
    pub pricing_plan: PricingPlan,
    pub total_price: f64,
}

impl CreateBookingParam {
    pub fn from_dto(user_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            user_id,
            vehicle_id: dto.vehicle_id,
            pricing_plan: dto.pricing_plan,
            total_price: dto.total_price,
        }
    }
}
