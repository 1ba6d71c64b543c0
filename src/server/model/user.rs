//! User domain models and parameters.
//!
//! `User` never carries the password hash; the only path that reads it is
//! `UserCredentials`, used by login.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::{
    admin::TopUserDto,
    auth::RegisterDto,
    user::{UpdateProfileDto, UserDto, UserSummaryDto},
};

/// Registered account with its role and lifetime totals.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub drivers_license: Option<String>,
    pub role: UserRole,
    /// Deactivated accounts cannot log in or use their tokens.
    pub is_active: bool,
    /// Number of completed bookings.
    pub total_trips: i32,
    /// Sum of `total_price` over completed bookings.
    pub total_spent: f64,
    pub member_since: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            phone_number: self.phone_number,
            drivers_license: self.drivers_license,
            role: self.role,
            is_active: self.is_active,
            total_trips: self.total_trips,
            total_spent: self.total_spent,
            member_since: self.member_since,
            created_at: self.created_at,
        }
    }

    pub fn into_top_user_dto(self) -> TopUserDto {
        TopUserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            total_trips: self.total_trips,
            total_spent: self.total_spent,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            phone_number: entity.phone_number,
            drivers_license: entity.drivers_license,
            role: entity.role,
            is_active: entity.is_active,
            total_trips: entity.total_trips,
            total_spent: entity.total_spent,
            member_since: entity.member_since,
            created_at: entity.created_at,
        }
    }
}

/// A user together with their stored bcrypt hash.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Name and email of a user, nested in booking responses.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// User with the number of bookings and trips they own.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithCounts {
    pub user: User,
    pub booking_count: u64,
    pub trip_count: u64,
}

/// Parameters for creating an account. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub drivers_license: Option<String>,
    pub role: UserRole,
}

/// Plain-text registration input, hashed by the auth service.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub drivers_license: Option<String>,
}

impl From<RegisterDto> for RegisterParam {
    fn from(dto: RegisterDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            name: dto.name,
            phone_number: dto.phone_number,
            drivers_license: dto.drivers_license,
        }
    }
}

/// Profile fields a user may change on their own account. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub drivers_license: Option<String>,
}

impl UpdateProfileParam {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none() && self.drivers_license.is_none()
    }
}

impl From<UpdateProfileDto> for UpdateProfileParam {
    fn from(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            phone_number: dto.phone_number,
            drivers_license: dto.drivers_license,
        }
    }
}

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring matched against email and name.
    pub search: Option<String>,
    pub role: Option<UserRole>,
}
