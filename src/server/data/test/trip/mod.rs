use crate::server::{data::trip::TripRepository, model::trip::CreateTripParam};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, SqlErr};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_booking_with_dependencies},
};

mod create;
mod queries;
