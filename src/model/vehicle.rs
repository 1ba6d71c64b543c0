use chrono::{DateTime, Utc};
use entity::vehicle::VehicleStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{api::PaginationDto, review::ReviewDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_minute: f64,
    pub price_per_hour: f64,
    pub price_per_day: f64,
    pub price_per_week: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub seats: i32,
    pub image_url: Option<String>,
    #[schema(value_type = String, example = "AVAILABLE")]
    pub status: VehicleStatus,
    pub is_active: bool,
    pub battery_level: i32,
    pub fuel_level: i32,
    pub rating: f64,
    pub review_count: i32,
    pub total_trips: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Vehicle with its most recent reviews, returned by the detail endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct VehicleDetailDto {
    #[serde(flatten)]
    pub vehicle: VehicleDto,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct VehicleEnvelopeDto {
    pub vehicle: VehicleDetailDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct VehicleListDto {
    pub total: u64,
    pub vehicles: Vec<VehicleDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct VehicleMessageDto {
    pub message: String,
    pub vehicle: VehicleDto,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct VehicleQueryDto {
    pub city: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<VehicleStatus>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Both coordinates are optional at the wire level so a missing one can be
/// reported with a readable message instead of a deserialization error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateLocationDto {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateStatusDto {
    #[schema(value_type = String, example = "MAINTENANCE")]
    pub status: VehicleStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub brand: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1, max = 16))]
    pub license_plate: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 0.0))]
    pub price_per_minute: f64,
    #[validate(range(min = 0.0))]
    pub price_per_hour: f64,
    #[validate(range(min = 0.0))]
    pub price_per_day: f64,
    #[validate(range(min = 0.0))]
    pub price_per_week: f64,
    #[validate(length(min = 1))]
    pub fuel_type: String,
    #[validate(length(min = 1))]
    pub transmission: String,
    #[validate(range(min = 1, max = 60))]
    pub seats: i32,
    pub image_url: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub battery_level: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub fuel_level: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<VehicleStatus>,
}

/// Partial update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub brand: Option<String>,
    #[validate(length(min = 1))]
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price_per_minute: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price_per_hour: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price_per_day: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price_per_week: Option<f64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    #[validate(range(min = 1, max = 60))]
    pub seats: Option<i32>,
    pub image_url: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub battery_level: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub fuel_level: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<VehicleStatus>,
    pub is_active: Option<bool>,
}
