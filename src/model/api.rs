use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every 4xx response.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of 500 responses: `{ "error": { "message": ..., "status": 500 } }`.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct InternalErrorDto {
    pub error: InternalErrorBodyDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct InternalErrorBodyDto {
    pub message: String,
    pub status: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PaginationDto {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

/// Paging parameters accepted by every list endpoint. `page` is 1-based.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct PageQueryDto {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ApiInfoDto {
    pub message: String,
    pub version: String,
    pub endpoints: ApiEndpointsDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ApiEndpointsDto {
    pub auth: String,
    pub users: String,
    pub vehicles: String,
    pub bookings: String,
    pub trips: String,
    pub reviews: String,
    pub admin: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub version: String,
    pub database: bool,
}
