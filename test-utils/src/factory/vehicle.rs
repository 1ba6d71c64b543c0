//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::vehicle::VehicleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// Defaults describe an available, active electric hatchback in Prague.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    brand: String,
    city: String,
    license_plate: String,
    status: VehicleStatus,
    is_active: bool,
    total_trips: i32,
    rating: f64,
    review_count: i32,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `VehicleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            brand: "Skoda".to_string(),
            city: "Prague".to_string(),
            license_plate: format!("TST-{:05}", id),
            status: VehicleStatus::Available,
            is_active: true,
            total_trips: 0,
            rating: 0.0,
            review_count: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = license_plate.into();
        self
    }

    pub fn status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn total_trips(mut self, total_trips: i32) -> Self {
        self.total_trips = total_trips;
        self
    }

    /// Seeds the stored running mean together with the number of reviews behind it.
    pub fn rating(mut self, rating: f64, review_count: i32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            brand: ActiveValue::Set(self.brand),
            model: ActiveValue::Set("Enyaq".to_string()),
            year: ActiveValue::Set(2023),
            license_plate: ActiveValue::Set(self.license_plate),
            city: ActiveValue::Set(self.city),
            latitude: ActiveValue::Set(50.0875),
            longitude: ActiveValue::Set(14.4213),
            price_per_minute: ActiveValue::Set(0.3),
            price_per_hour: ActiveValue::Set(12.0),
            price_per_day: ActiveValue::Set(70.0),
            price_per_week: ActiveValue::Set(400.0),
            fuel_type: ActiveValue::Set("electric".to_string()),
            transmission: ActiveValue::Set("automatic".to_string()),
            seats: ActiveValue::Set(5),
            image_url: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            is_active: ActiveValue::Set(self.is_active),
            battery_level: ActiveValue::Set(100),
            fuel_level: ActiveValue::Set(100),
            rating: ActiveValue::Set(self.rating),
            review_count: ActiveValue::Set(self.review_count),
            total_trips: ActiveValue::Set(self.total_trips),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
