use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UserEnvelopeDto, UserMessageDto},
    },
    server::{
        controller::extract::ApiJson,
        error::AppError,
        middleware::auth::AuthGuard,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the caller's profile, including trip and spending totals.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile", body = UserEnvelopeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get_profile(caller.id).await?;

    Ok((StatusCode::OK, Json(UserEnvelopeDto { user: user.into_dto() })))
}

/// Update the caller's name, phone number or driver's license.
///
/// Fields left out of the body are not changed. Email, role and totals cannot be
/// changed here.
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserMessageDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    payload.validate()?;

    let user = UserService::new(&state.db)
        .update_profile(caller.id, payload.into())
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserMessageDto {
            message: "Profile updated".to_string(),
            user: user.into_dto(),
        }),
    ))
}
