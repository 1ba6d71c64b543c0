use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::jwt::{self, JwtConfig},
};

/// Actions a route may require of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Create, finish and review bookings.
    Rent,
    /// Report a vehicle's location or operational status.
    OperateVehicle,
    /// Everything under `/api/admin`.
    Admin,
}

/// Single source of truth for which role may do what.
pub fn authorize(role: UserRole, permission: Permission) -> bool {
    match permission {
        Permission::Rent | Permission::OperateVehicle => true,
        Permission::Admin => role == UserRole::Admin,
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtConfig,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtConfig, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Resolves the bearer token to an active user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::UserDeactivated)` - Account has been deactivated
    /// - `Err(AuthError::AccessDenied)` - Role lacks one of the permissions
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let claims = jwt::validate_token(token, self.jwt)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::UserDeactivated(user.id).into());
        }

        // Role is read from the database, not the token, so demotions apply immediately.
        for permission in permissions {
            if !authorize(user.role, *permission) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("{:?} permission required", permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
