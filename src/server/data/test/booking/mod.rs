use crate::server::{
    data::booking::BookingRepository,
    model::{booking::CreateBookingParam, page::PageParam},
};
use chrono::{Duration, Utc};
use entity::booking::{BookingStatus, PricingPlan};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::create_booking_with_dependencies},
};

mod create;
mod finish;
mod queries;
mod statistics;
