use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token failed signature or expiry validation.
    #[error("Bearer token failed validation: {0}")]
    InvalidToken(String),

    /// Token is valid but names a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Email/password pair did not match a user.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// The account has been deactivated by an administrator.
    #[error("User {0} is deactivated")]
    UserDeactivated(i32),

    /// The user's role does not grant the requested permission.
    ///
    /// # Fields
    /// - User id that was denied
    /// - Description of the denied permission, logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` / `InvalidCredentials` → 401
/// - `UserDeactivated` / `AccessDenied` → 403
///
/// All errors are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Access token required"),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::UserDeactivated(_) => (StatusCode::FORBIDDEN, "Account is deactivated"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Admin access required"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
