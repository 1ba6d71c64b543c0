//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::review::{ReviewDto, ReviewerDto},
    server::model::vehicle::Vehicle,
};

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Reviewer's display name when joined.
    pub author: Option<String>,
    pub vehicle: Option<Vehicle>,
}

impl Review {
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user_id: self.user_id,
            vehicle_id: self.vehicle_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
            user: self.author.map(|name| ReviewerDto { name }),
            vehicle: self.vehicle.map(Vehicle::into_dto),
        }
    }

    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            vehicle_id: entity.vehicle_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
            author: None,
            vehicle: None,
        }
    }

    pub fn with_author(mut self, user: Option<entity::user::Model>) -> Self {
        self.author = user.map(|u| u.name);
        self
    }

    pub fn with_vehicle(mut self, vehicle: Option<entity::vehicle::Model>) -> Self {
        self.vehicle = vehicle.map(Vehicle::from_entity);
        self
    }
}

/// Review input. `rating` stays optional until the service checks it.
#[derive(Debug, Clone)]
pub struct CreateReviewParam {
    pub user_id: i32,
    pub vehicle_id: i32,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}
