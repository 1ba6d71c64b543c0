use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vehicle::{
            UpdateLocationDto, UpdateStatusDto, VehicleDetailDto, VehicleEnvelopeDto,
            VehicleListDto, VehicleMessageDto, VehicleQueryDto,
        },
    },
    server::{
        controller::extract::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{page::PageParam, vehicle::VehicleFilter},
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// Default page size for the public vehicle map.
const DEFAULT_LIMIT: u64 = 50;

/// List active vehicles, optionally filtered by city and status.
///
/// Deactivated vehicles never appear here.
///
/// # Returns
/// - `200 OK` - Page of vehicles with the total match count
/// - `400 Bad Request` - Page below 1 or limit outside 1..=100
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    params(
        ("city" = Option<String>, Query, description = "Exact city name"),
        ("status" = Option<String>, Query, description = "AVAILABLE, BOOKED, MAINTENANCE or CHARGING"),
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, 1-100 (default: 50)")
    ),
    responses(
        (status = 200, description = "Vehicles", body = VehicleListDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<VehicleQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageParam::new(query.page, query.limit, DEFAULT_LIMIT)?;
    let filter = VehicleFilter {
        city: query.city,
        status: query.status,
        active_only: true,
    };

    let vehicles = VehicleService::new(&state.db)
        .list_public(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(VehicleListDto {
            total: vehicles.total,
            pagination: vehicles.pagination_dto(),
            vehicles: vehicles.items.into_iter().map(|v| v.into_dto()).collect(),
        }),
    ))
}

/// Get a vehicle with its 10 latest reviews.
///
/// Deactivated vehicles are still returned so past bookings can link to them.
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "Vehicle detail", body = VehicleEnvelopeDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (vehicle, reviews) = VehicleService::new(&state.db).get_detail(id).await?;

    Ok((
        StatusCode::OK,
        Json(VehicleEnvelopeDto {
            vehicle: VehicleDetailDto {
                vehicle: vehicle.into_dto(),
                reviews: reviews.into_iter().map(|r| r.into_dto()).collect(),
            },
        }),
    ))
}

/// Report a vehicle's GPS position.
///
/// # Returns
/// - `200 OK` - Location stored
/// - `400 Bad Request` - Latitude or longitude missing or out of range
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Vehicle not found
#[utoipa::path(
    patch,
    path = "/api/vehicles/{id}/location",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Location updated", body = VehicleMessageDto),
        (status = 400, description = "Latitude and longitude required", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::OperateVehicle])
        .await?;

    let vehicle = VehicleService::new(&state.db)
        .update_location(id, payload.latitude, payload.longitude)
        .await?;

    Ok((
        StatusCode::OK,
        Json(VehicleMessageDto {
            message: "Location updated".to_string(),
            vehicle: vehicle.into_dto(),
        }),
    ))
}

/// Set a vehicle's operational status.
///
/// `BOOKED` can only be reached through a booking, and a booked vehicle keeps its
/// status until that booking ends.
///
/// # Returns
/// - `200 OK` - Status changed
/// - `400 Bad Request` - Requested status is `BOOKED` or unknown
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Vehicle not found
/// - `409 Conflict` - Vehicle is currently booked
#[utoipa::path(
    patch,
    path = "/api/vehicles/{id}/status",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = VehicleMessageDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Vehicle is currently booked", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::OperateVehicle])
        .await?;

    let vehicle = VehicleService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(VehicleMessageDto {
            message: "Status updated".to_string(),
            vehicle: vehicle.into_dto(),
        }),
    ))
}
