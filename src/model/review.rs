use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::vehicle::VehicleDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ReviewerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReviewerDto {
    pub name: String,
}

/// `rating` is optional on the wire so its absence gets the same 400 message as an
/// out of range value.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub vehicle_id: i32,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ReviewMessageDto {
    pub message: String,
    pub review: ReviewDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ReviewListDto {
    pub reviews: Vec<ReviewDto>,
}
