use chrono::{DateTime, Utc};
use entity::booking::{BookingStatus, PricingPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{user::UserSummaryDto, vehicle::VehicleDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    #[schema(value_type = String, example = "ACTIVE")]
    pub status: BookingStatus,
    #[schema(value_type = String, example = "HOUR")]
    pub pricing_plan: PricingPlan,
    pub total_price: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummaryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub vehicle_id: i32,
    #[schema(value_type = String, example = "HOUR")]
    pub pricing_plan: PricingPlan,
    pub total_price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct BookingMessageDto {
    pub message: String,
    pub booking: BookingDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct BookingEnvelopeDto {
    pub booking: BookingDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct BookingListDto {
    pub bookings: Vec<BookingDto>,
}
