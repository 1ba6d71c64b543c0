//! Registration and login.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterParam, User},
    util::{jwt, jwt::JwtConfig, password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtConfig,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtConfig) -> Self {
        Self { db, jwt }
    }

    /// Creates a `USER` account and issues its first token.
    ///
    /// # Arguments
    /// - `param` - Registration input with the plain-text password
    ///
    /// # Returns
    /// - `Ok((User, String))` - The new user and a signed token
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError)` - Hashing, signing or database failure
    pub async fn register(&self, param: RegisterParam) -> Result<(User, String), AppError> {
        let password_hash = hash_off_thread(param.password).await?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                email: param.email,
                password_hash,
                name: param.name,
                phone_number: param.phone_number,
                drivers_license: param.drivers_license,
                role: UserRole::User,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "User already exists"))?;

        let token = jwt::generate_token(user.id, user.role, self.jwt)?;

        tracing::info!("Registered user {}", user.id);

        Ok((user, token))
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and a signed token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::UserDeactivated)` - Correct credentials on a deactivated account
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let email = email.trim().to_lowercase();

        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_off_thread(password.to_string(), credentials.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = credentials.user;
        if !user.is_active {
            return Err(AuthError::UserDeactivated(user.id).into());
        }

        let token = jwt::generate_token(user.id, user.role, self.jwt)?;

        Ok((user, token))
    }
}

/// bcrypt is CPU bound; keep it off the async workers.
async fn hash_off_thread(plain: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || password::hash_password(&plain))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

async fn verify_off_thread(plain: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || password::verify_password(&plain, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))
}
