//! Trip domain model.
//!
//! Trips are written once, when a booking completes.

use chrono::{DateTime, Utc};

use crate::{model::trip::TripDto, server::model::vehicle::Vehicle};

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub booking_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub cost: f64,
    pub distance_km: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub vehicle: Option<Vehicle>,
}

impl Trip {
    pub fn into_dto(self) -> TripDto {
        TripDto {
            id: self.id,
            user_id: self.user_id,
            vehicle_id: self.vehicle_id,
            booking_id: self.booking_id,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_minutes: self.duration_minutes,
            cost: self.cost,
            distance_km: self.distance_km,
            created_at: self.created_at,
            vehicle: self.vehicle.map(Vehicle::into_dto),
        }
    }

    pub fn from_entity(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            vehicle_id: entity.vehicle_id,
            booking_id: entity.booking_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            duration_minutes: entity.duration_minutes,
            cost: entity.cost,
            distance_km: entity.distance_km,
            created_at: entity.created_at,
            vehicle: None,
        }
    }

    pub fn with_vehicle(mut self, vehicle: Option<entity::vehicle::Model>) -> Self {
        self.vehicle = vehicle.map(Vehicle::from_entity);
        self
    }
}

/// Trip record derived from a completed booking.
#[derive(Debug, Clone)]
pub struct CreateTripParam {
    pub user_id: i32,
    pub vehicle_id: i32,
    pub booking_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub cost: f64,
}

impl CreateTripParam {
    /// Whole minutes between start and end, never negative.
    pub fn duration_minutes(&self) -> i32 {
        let minutes = (self.end_time - self.start_time).num_minutes().max(0);
        i32::try_from(minutes).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn param(start: DateTime<Utc>, end: DateTime<Utc>) -> CreateTripParam {
        CreateTripParam {
            user_id: 1,
            vehicle_id: 1,
            booking_id: 1,
            start_time: start,
            end_time: end,
            cost: 10.0,
        }
    }

    #[test]
    fn duration_truncates_to_whole_minutes() {
        let start = Utc::now();
        let end = start + Duration::seconds(150);

        assert_eq!(param(start, end).duration_minutes(), 2);
    }

    #[test]
    fn duration_is_never_negative() {
        let start = Utc::now();
        let end = start - Duration::minutes(5);

        assert_eq!(param(start, end).duration_minutes(), 0);
    }
}
