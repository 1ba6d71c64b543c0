use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{BookingEnvelopeDto, BookingListDto, BookingMessageDto, CreateBookingDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::CreateBookingParam,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a vehicle.
///
/// The vehicle must be active and `AVAILABLE`; it becomes `BOOKED` in the same
/// transaction that creates the booking.
///
/// # Returns
/// - `201 Created` - Booking created, vehicle reserved
/// - `400 Bad Request` - Invalid body or price
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Vehicle not found
/// - `409 Conflict` - Vehicle not available
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingMessageDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Vehicle not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Rent])
        .await?;

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParam::from_dto(user.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingMessageDto {
            message: "Booking created successfully".to_string(),
            booking: booking.into_dto(),
        }),
    ))
}

/// List the caller's bookings with their vehicles, newest first.
#[utoipa::path(
    get,
    path = "/api/bookings/my",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Caller's bookings", body = BookingListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn my_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Rent])
        .await?;

    let bookings = BookingService::new(&state.db).list_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(BookingListDto {
            bookings: bookings.into_iter().map(|b| b.into_dto()).collect(),
        }),
    ))
}

/// Get one of the caller's bookings with vehicle and user summary.
///
/// Bookings of other users are reported as not found.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking", body = BookingEnvelopeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Rent])
        .await?;

    let booking = BookingService::new(&state.db)
        .get_for_user(id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookingEnvelopeDto {
            booking: booking.into_dto(),
        }),
    ))
}

/// Finish an active booking.
///
/// Frees the vehicle, adds the price to the caller's totals and records a trip.
///
/// # Returns
/// - `200 OK` - Booking completed
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No active booking with that id for the caller
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/complete",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking completed", body = BookingMessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Active booking not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn complete_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Rent])
        .await?;

    let booking = BookingService::new(&state.db).complete(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(BookingMessageDto {
            message: "Booking completed".to_string(),
            booking: booking.into_dto(),
        }),
    ))
}

/// Cancel an active booking and free the vehicle.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Active booking not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Rent])
        .await?;

    BookingService::new(&state.db).cancel(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Booking cancelled".to_string(),
        }),
    ))
}
