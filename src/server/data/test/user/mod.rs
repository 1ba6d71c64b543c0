use crate::server::{
    data::user::UserRepository,
    model::{
        page::PageParam,
        user::{CreateUserParam, UpdateProfileParam, UserFilter},
    },
};
use entity::user::UserRole;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod record_trip;
mod update_profile;

fn create_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: "Jana Novakova".to_string(),
        phone_number: None,
        drivers_license: None,
        role: UserRole::User,
    }
}
