//! Route table, middleware stack and OpenAPI document.

use std::any::Any;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::api::{ErrorDto, InternalErrorDto},
    server::{
        config::Config,
        controller::{admin, auth, booking, review, root, trip, user, vehicle},
        error::{config::ConfigError, internal_error_response, AppError},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Prague Carsharing API"),
    paths(
        root::info,
        root::health,
        auth::register,
        auth::login,
        auth::me,
        user::get_profile,
        user::update_profile,
        vehicle::list_vehicles,
        vehicle::get_vehicle,
        vehicle::update_location,
        vehicle::update_status,
        booking::create_booking,
        booking::my_bookings,
        booking::get_booking,
        booking::complete_booking,
        booking::cancel_booking,
        trip::list_trips,
        review::create_review,
        review::vehicle_reviews,
        admin::dashboard,
        admin::list_users,
        admin::get_user,
        admin::update_user_status,
        admin::list_vehicles,
        admin::create_vehicle,
        admin::update_vehicle,
        admin::delete_vehicle,
        admin::list_bookings,
        admin::analytics,
    ),
    components(schemas(ErrorDto, InternalErrorDto)),
    modifiers(&BearerAuth),
    tags(
        (name = "root", description = "Service information"),
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "Own profile"),
        (name = "vehicle", description = "Vehicle catalog and telemetry"),
        (name = "booking", description = "Booking lifecycle"),
        (name = "trip", description = "Trip history"),
        (name = "review", description = "Vehicle reviews"),
        (name = "admin", description = "Administration")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::info))
        .route("/health", get(root::health))
        .route("/api/openapi.json", get(root::openapi))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/users/me",
            get(user::get_profile).patch(user::update_profile),
        )
        .route("/api/vehicles", get(vehicle::list_vehicles))
        .route("/api/vehicles/{id}", get(vehicle::get_vehicle))
        .route(
            "/api/vehicles/{id}/location",
            patch(vehicle::update_location),
        )
        .route("/api/vehicles/{id}/status", patch(vehicle::update_status))
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/bookings/my", get(booking::my_bookings))
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking).delete(booking::cancel_booking),
        )
        .route(
            "/api/bookings/{id}/complete",
            patch(booking::complete_booking),
        )
        .route("/api/trips", get(trip::list_trips))
        .route("/api/reviews", post(review::create_review))
        .route(
            "/api/reviews/vehicle/{vehicle_id}",
            get(review::vehicle_reviews),
        )
        .route("/api/admin/dashboard", get(admin::dashboard))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/{id}", get(admin::get_user))
        .route(
            "/api/admin/users/{id}/status",
            patch(admin::update_user_status),
        )
        .route(
            "/api/admin/vehicles",
            get(admin::list_vehicles).post(admin::create_vehicle),
        )
        .route(
            "/api/admin/vehicles/{id}",
            patch(admin::update_vehicle).delete(admin::delete_vehicle),
        )
        .route("/api/admin/bookings", get(admin::list_bookings))
        .route("/api/admin/analytics", get(admin::analytics))
}

/// Builds the complete application: routes, 404 fallback and middleware.
///
/// Layers, outermost first: CORS, request tracing, panic recovery.
///
/// # Returns
/// - `Ok(Router)` - Ready to serve
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value
pub fn app(state: AppState, config: &Config) -> Result<Router, AppError> {
    let cors = cors_layer(config.cors_origin.as_deref())?;

    Ok(router()
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let Some(origin) = origin else {
        return Ok(CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin));
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]))
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Route not found".to_string(),
        }),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    tracing::error!("Request handler panicked: {}", detail);

    internal_error_response()
}
