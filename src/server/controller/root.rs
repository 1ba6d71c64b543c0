use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ApiEndpointsDto, ApiInfoDto, HealthDto},
    server::{router::ApiDoc, state::AppState},
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static ROOT_TAG: &str = "root";

const API_NAME: &str = "Prague Carsharing API";

/// API name, version and the base path of every resource.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "API information", body = ApiInfoDto)
    ),
)]
pub async fn info() -> impl IntoResponse {
    Json(ApiInfoDto {
        message: API_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ApiEndpointsDto {
            auth: "/api/auth".to_string(),
            users: "/api/users".to_string(),
            vehicles: "/api/vehicles".to_string(),
            bookings: "/api/bookings".to_string(),
            trips: "/api/trips".to_string(),
            reviews: "/api/reviews".to_string(),
            admin: "/api/admin".to_string(),
        },
    })
}

/// Liveness probe. Reports whether the database answers a ping.
///
/// Always responds 200 so the process is not restarted over a database outage;
/// inspect `database` for readiness.
#[utoipa::path(
    get,
    path = "/health",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            false
        }
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
        }),
    )
}

/// The OpenAPI document for this API.
pub async fn openapi() -> impl IntoResponse {
    use utoipa::OpenApi;

    Json(ApiDoc::openapi())
}
