use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, trip::TripListDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::trip::TripService,
        state::AppState,
    },
};

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip";

/// List the caller's trips with their vehicles, newest first.
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = TRIP_TAG,
    responses(
        (status = 200, description = "Trip history", body = TripListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_trips(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Rent])
        .await?;

    let trips = TripService::new(&state.db).list_for_user(caller.id).await?;

    Ok((
        StatusCode::OK,
        Json(TripListDto {
            trips: trips.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}
