use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        admin::{
            AdminBookingListDto, AdminBookingQueryDto, AdminUserDetailDto, AdminUserDto,
            AdminUserListDto, AdminUserQueryDto, AdminVehicleDto, AdminVehicleListDto,
            AnalyticsDto, DashboardDto, UpdateUserStatusDto,
        },
        api::{ErrorDto, MessageDto},
        user::UserMessageDto,
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleMessageDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{page::PageParam, user::UserFilter},
        service::{admin::AdminService, booking::BookingService, vehicle::VehicleService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Default page size for admin listings.
const DEFAULT_LIMIT: u64 = 20;

/// Headline counts and the 10 most recent bookings.
///
/// # Access Control
/// - `Admin` - Only admins can view the dashboard
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard", body = DashboardDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let dashboard = AdminService::new(&state.db).dashboard().await?;

    Ok((
        StatusCode::OK,
        Json(DashboardDto {
            stats: dashboard.stats.into_dto(),
            recent_bookings: dashboard
                .recent_bookings
                .into_iter()
                .map(|b| b.into_dto())
                .collect(),
        }),
    ))
}

/// Page through users with their booking and trip counts.
///
/// `search` matches email or name case-insensitively.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, 1-100 (default: 20)"),
        ("search" = Option<String>, Query, description = "Substring of email or name"),
        ("role" = Option<String>, Query, description = "USER or ADMIN")
    ),
    responses(
        (status = 200, description = "Users", body = AdminUserListDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<AdminUserQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = PageParam::new(query.page, query.limit, DEFAULT_LIMIT)?;
    let filter = UserFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
        role: query.role,
    };

    let users = AdminService::new(&state.db).list_users(filter, page).await?;

    Ok((
        StatusCode::OK,
        Json(AdminUserListDto {
            pagination: users.pagination_dto(),
            users: users
                .items
                .into_iter()
                .map(|u| AdminUserDto {
                    user: u.user.into_dto(),
                    booking_count: u.booking_count,
                    trip_count: u.trip_count,
                })
                .collect(),
        }),
    ))
}

/// A user with their 10 latest bookings and trips and all of their reviews.
#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User detail", body = AdminUserDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (user, bookings, trips, reviews) = AdminService::new(&state.db).user_detail(id).await?;

    Ok((
        StatusCode::OK,
        Json(AdminUserDetailDto {
            user: user.into_dto(),
            bookings: bookings.into_iter().map(|b| b.into_dto()).collect(),
            trips: trips.into_iter().map(|t| t.into_dto()).collect(),
            reviews: reviews.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Activate or deactivate an account.
///
/// A deactivated user can no longer log in, and their existing tokens stop working.
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/status",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Status changed", body = UserMessageDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = AdminService::new(&state.db)
        .set_user_status(id, payload.is_active)
        .await?;

    let message = if user.is_active {
        "User activated"
    } else {
        "User deactivated"
    };

    Ok((
        StatusCode::OK,
        Json(UserMessageDto {
            message: message.to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Every vehicle, deactivated ones included, with booking and trip counts.
#[utoipa::path(
    get,
    path = "/api/admin/vehicles",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Vehicles", body = AdminVehicleListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let vehicles = VehicleService::new(&state.db).list_with_counts().await?;

    Ok((
        StatusCode::OK,
        Json(AdminVehicleListDto {
            vehicles: vehicles
                .into_iter()
                .map(|v| AdminVehicleDto {
                    vehicle: v.vehicle.into_dto(),
                    booking_count: v.booking_count,
                    trip_count: v.trip_count,
                })
                .collect(),
        }),
    ))
}

/// Add a vehicle to the fleet.
///
/// Battery and fuel level default to 100 and status to `AVAILABLE`.
///
/// # Returns
/// - `201 Created` - Vehicle created
/// - `400 Bad Request` - Invalid vehicle data or status `BOOKED`
/// - `409 Conflict` - License plate already registered
#[utoipa::path(
    post,
    path = "/api/admin/vehicles",
    tag = ADMIN_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleMessageDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "License plate already registered", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let vehicle = VehicleService::new(&state.db).create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(VehicleMessageDto {
            message: "Vehicle created".to_string(),
            vehicle: vehicle.into_dto(),
        }),
    ))
}

/// Partially update a vehicle. Omitted fields are left unchanged.
#[utoipa::path(
    patch,
    path = "/api/admin/vehicles/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleMessageDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let vehicle = VehicleService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((
        StatusCode::OK,
        Json(VehicleMessageDto {
            message: "Vehicle updated".to_string(),
            vehicle: vehicle.into_dto(),
        }),
    ))
}

/// Soft-delete a vehicle. It disappears from the public list but keeps its history.
#[utoipa::path(
    delete,
    path = "/api/admin/vehicles/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "Vehicle deactivated", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    VehicleService::new(&state.db).deactivate(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Vehicle deactivated".to_string(),
        }),
    ))
}

/// Page through all bookings, optionally by status, with user and vehicle.
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_TAG,
    params(
        ("status" = Option<String>, Query, description = "ACTIVE, COMPLETED or CANCELLED"),
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, 1-100 (default: 20)")
    ),
    responses(
        (status = 200, description = "Bookings", body = AdminBookingListDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<AdminBookingQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = PageParam::new(query.page, query.limit, DEFAULT_LIMIT)?;
    let bookings = BookingService::new(&state.db)
        .list_all(query.status, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AdminBookingListDto {
            pagination: bookings.pagination_dto(),
            bookings: bookings.items.into_iter().map(|b| b.into_dto()).collect(),
        }),
    ))
}

/// Revenue per day over the last 30 days, top vehicles and spenders, and
/// active vehicles per city.
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Analytics", body = AnalyticsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let analytics = AdminService::new(&state.db).analytics().await?;

    Ok((
        StatusCode::OK,
        Json(AnalyticsDto {
            revenue_by_day: analytics
                .revenue_by_day
                .into_iter()
                .map(|d| d.into_dto())
                .collect(),
            popular_vehicles: analytics
                .popular_vehicles
                .into_iter()
                .map(|v| v.into_popular_dto())
                .collect(),
            top_users: analytics
                .top_users
                .into_iter()
                .map(|u| u.into_top_user_dto())
                .collect(),
            city_stats: analytics
                .city_stats
                .into_iter()
                .map(|c| c.into_dto())
                .collect(),
        }),
    ))
}
