use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::vehicle::VehicleDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TripListDto {
    pub trips: Vec<TripDto>,
}
