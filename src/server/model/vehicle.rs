//! Vehicle domain models and parameters.

use chrono::{DateTime, Utc};
use entity::vehicle::VehicleStatus;

use crate::model::{
    admin::PopularVehicleDto,
    vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
};

/// Battery and fuel level assigned to new vehicles when none is given.
pub const DEFAULT_ENERGY_LEVEL: i32 = 100;

/// A rentable vehicle with its pricing tiers and operational state.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_minute: f64,
    pub price_per_hour: f64,
    pub price_per_day: f64,
    pub price_per_week: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub seats: i32,
    pub image_url: Option<String>,
    pub status: VehicleStatus,
    /// `false` once an admin has soft-deleted the vehicle.
    pub is_active: bool,
    pub battery_level: i32,
    pub fuel_level: i32,
    /// Mean of all review ratings, 0 when unreviewed.
    pub rating: f64,
    pub review_count: i32,
    pub total_trips: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            model: self.model,
            year: self.year,
            license_plate: self.license_plate,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            price_per_minute: self.price_per_minute,
            price_per_hour: self.price_per_hour,
            price_per_day: self.price_per_day,
            price_per_week: self.price_per_week,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            seats: self.seats,
            image_url: self.image_url,
            status: self.status,
            is_active: self.is_active,
            battery_level: self.battery_level,
            fuel_level: self.fuel_level,
            rating: self.rating,
            review_count: self.review_count,
            total_trips: self.total_trips,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_popular_dto(self) -> PopularVehicleDto {
        PopularVehicleDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            total_trips: self.total_trips,
            rating: self.rating,
        }
    }

    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            brand: entity.brand,
            model: entity.model,
            year: entity.year,
            license_plate: entity.license_plate,
            city: entity.city,
            latitude: entity.latitude,
            longitude: entity.longitude,
            price_per_minute: entity.price_per_minute,
            price_per_hour: entity.price_per_hour,
            price_per_day: entity.price_per_day,
            price_per_week: entity.price_per_week,
            fuel_type: entity.fuel_type,
            transmission: entity.transmission,
            seats: entity.seats,
            image_url: entity.image_url,
            status: entity.status,
            is_active: entity.is_active,
            battery_level: entity.battery_level,
            fuel_level: entity.fuel_level,
            rating: entity.rating,
            review_count: entity.review_count,
            total_trips: entity.total_trips,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Vehicle with the number of bookings and trips referencing it.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleWithCounts {
    pub vehicle: Vehicle,
    pub booking_count: u64,
    pub trip_count: u64,
}

#[derive(Debug, Clone)]
pub struct CreateVehicleParam {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_minute: f64,
    pub price_per_hour: f64,
    pub price_per_day: f64,
    pub price_per_week: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub seats: i32,
    pub image_url: Option<String>,
    pub battery_level: i32,
    pub fuel_level: i32,
    pub status: VehicleStatus,
}

impl From<CreateVehicleDto> for CreateVehicleParam {
    fn from(dto: CreateVehicleDto) -> Self {
        Self {
            name: dto.name,
            brand: dto.brand,
            model: dto.model,
            year: dto.year,
            license_plate: dto.license_plate,
            city: dto.city,
            latitude: dto.latitude,
            longitude: dto.longitude,
            price_per_minute: dto.price_per_minute,
            price_per_hour: dto.price_per_hour,
            price_per_day: dto.price_per_day,
            price_per_week: dto.price_per_week,
            fuel_type: dto.fuel_type,
            transmission: dto.transmission,
            seats: dto.seats,
            image_url: dto.image_url,
            battery_level: dto.battery_level.unwrap_or(DEFAULT_ENERGY_LEVEL),
            fuel_level: dto.fuel_level.unwrap_or(DEFAULT_ENERGY_LEVEL),
            status: dto.status.unwrap_or(VehicleStatus::Available),
        }
    }
}

/// Partial vehicle update; `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateVehicleParam {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price_per_minute: Option<f64>,
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub seats: Option<i32>,
    pub image_url: Option<String>,
    pub battery_level: Option<i32>,
    pub fuel_level: Option<i32>,
    pub status: Option<VehicleStatus>,
    pub is_active: Option<bool>,
}

impl From<UpdateVehicleDto> for UpdateVehicleParam {
    fn from(dto: UpdateVehicleDto) -> Self {
        Self {
            name: dto.name,
            brand: dto.brand,
            model: dto.model,
            year: dto.year,
            city: dto.city,
            latitude: dto.latitude,
            longitude: dto.longitude,
            price_per_minute: dto.price_per_minute,
            price_per_hour: dto.price_per_hour,
            price_per_day: dto.price_per_day,
            price_per_week: dto.price_per_week,
            fuel_type: dto.fuel_type,
            transmission: dto.transmission,
            seats: dto.seats,
            image_url: dto.image_url,
            battery_level: dto.battery_level,
            fuel_level: dto.fuel_level,
            status: dto.status,
            is_active: dto.is_active,
        }
    }
}

/// Filters for vehicle listings.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    /// Exact city match.
    pub city: Option<String>,
    pub status: Option<VehicleStatus>,
    /// Excludes soft-deleted vehicles when set.
    pub active_only: bool,
}
