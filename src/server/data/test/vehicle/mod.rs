use crate::server::{
    data::vehicle::VehicleRepository,
    model::{
        page::PageParam,
        vehicle::{CreateVehicleParam, UpdateVehicleParam, VehicleFilter},
    },
};
use entity::vehicle::VehicleStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_rating;
mod create;
mod get_filtered;
mod reservation;
mod statistics;

fn create_param(license_plate: &str) -> CreateVehicleParam {
    CreateVehicleParam {
        name: "Tesla Model 3".to_string(),
        brand: "Tesla".to_string(),
        model: "Model 3".to_string(),
        year: 2023,
        license_plate: license_plate.to_string(),
        city: "Prague".to_string(),
        latitude: 50.0875,
        longitude: 14.4213,
        price_per_minute: 0.35,
        price_per_hour: 15.0,
        price_per_day: 80.0,
        price_per_week: 450.0,
        fuel_type: "electric".to_string(),
        transmission: "automatic".to_string(),
        seats: 5,
        image_url: None,
        battery_level: 100,
        fuel_level: 100,
        status: VehicleStatus::Available,
    }
}
