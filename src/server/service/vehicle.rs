//! Vehicle browsing, operational updates and fleet administration.

use entity::vehicle::VehicleStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, review::ReviewRepository, trip::TripRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        review::Review,
        vehicle::{
            CreateVehicleParam, UpdateVehicleParam, Vehicle, VehicleFilter, VehicleWithCounts,
        },
    },
};

/// Number of reviews embedded in the vehicle detail response.
const DETAIL_REVIEW_LIMIT: u64 = 10;

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active vehicles matching the filter.
    ///
    /// Soft-deleted vehicles are always excluded, whatever the filter says.
    pub async fn list_public(
        &self,
        filter: VehicleFilter,
        page: PageParam,
    ) -> Result<Paginated<Vehicle>, AppError> {
        let filter = VehicleFilter {
            active_only: true,
            ..filter
        };

        Ok(VehicleRepository::new(self.db)
            .get_filtered(&filter, page)
            .await?)
    }

    /// Gets a vehicle by id together with its latest reviews.
    ///
    /// Deactivated vehicles are still returned so existing bookings can show them.
    ///
    /// # Returns
    /// - `Ok((Vehicle, Vec<Review>))` - Vehicle and up to 10 newest reviews
    /// - `Err(AppError::NotFound)` - No vehicle with that id
    pub async fn get_detail(&self, id: i32) -> Result<(Vehicle, Vec<Review>), AppError> {
        let vehicle = VehicleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(vehicle_not_found)?;

        let reviews = ReviewRepository::new(self.db)
            .get_by_vehicle(id, Some(DETAIL_REVIEW_LIMIT))
            .await?;

        Ok((vehicle, reviews))
    }

    /// Moves a vehicle. Both coordinates are required.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - Vehicle at its new position
    /// - `Err(AppError::BadRequest)` - A coordinate is missing, not finite or out of range
    /// - `Err(AppError::NotFound)` - No vehicle with that id
    pub async fn update_location(
        &self,
        id: i32,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Vehicle, AppError> {
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(AppError::BadRequest(
                "Latitude and longitude required".to_string(),
            ));
        };

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::BadRequest(
                "Latitude must be between -90 and 90".to_string(),
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::BadRequest(
                "Longitude must be between -180 and 180".to_string(),
            ));
        }

        VehicleRepository::new(self.db)
            .update_location(id, latitude, longitude)
            .await?
            .ok_or_else(vehicle_not_found)
    }

    /// Sets an operational status such as `MAINTENANCE` or `CHARGING`.
    ///
    /// `BOOKED` is owned by the booking lifecycle and cannot be set here, and a
    /// vehicle that is currently booked keeps its status until the booking ends.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - Vehicle with the new status
    /// - `Err(AppError::BadRequest)` - Requested status is `BOOKED`
    /// - `Err(AppError::Conflict)` - Vehicle is currently booked
    /// - `Err(AppError::NotFound)` - No vehicle with that id
    pub async fn update_status(&self, id: i32, status: VehicleStatus) -> Result<Vehicle, AppError> {
        reject_booked_status(status)?;

        let repo = VehicleRepository::new(self.db);
        if !repo.set_status_unless_booked(id, status).await? {
            return match repo.find_by_id(id).await? {
                None => Err(vehicle_not_found()),
                Some(_) => Err(AppError::Conflict("Vehicle is currently booked".to_string())),
            };
        }

        repo.find_by_id(id).await?.ok_or_else(vehicle_not_found)
    }

    /// Lists every vehicle, including deactivated ones, with booking and trip counts.
    pub async fn list_with_counts(&self) -> Result<Vec<VehicleWithCounts>, AppError> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;
        let ids: Vec<i32> = vehicles.iter().map(|v| v.id).collect();

        let booking_repo = BookingRepository::new(self.db);
        let trip_repo = TripRepository::new(self.db);
        let (booking_counts, trip_counts) = tokio::try_join!(
            booking_repo.count_by_vehicles(&ids),
            trip_repo.count_by_vehicles(&ids),
        )?;

        Ok(vehicles
            .into_iter()
            .map(|vehicle| VehicleWithCounts {
                booking_count: booking_counts.get(&vehicle.id).copied().unwrap_or(0),
                trip_count: trip_counts.get(&vehicle.id).copied().unwrap_or(0),
                vehicle,
            })
            .collect())
    }

    /// Adds a vehicle to the fleet.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(AppError::BadRequest)` - Initial status is `BOOKED`
    /// - `Err(AppError::Conflict)` - License plate already registered
    pub async fn create(&self, param: CreateVehicleParam) -> Result<Vehicle, AppError> {
        reject_booked_status(param.status)?;

        let vehicle = VehicleRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "License plate already registered"))?;

        tracing::info!("Created vehicle {} ({})", vehicle.id, vehicle.license_plate);

        Ok(vehicle)
    }

    /// Applies a partial update from the admin panel.
    ///
    /// A status change goes through the same guard as [`Self::update_status`], so a
    /// vehicle held by an active booking cannot be freed from here.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The updated vehicle
    /// - `Err(AppError::BadRequest)` - Requested status is `BOOKED`
    /// - `Err(AppError::Conflict)` - Status change requested while the vehicle is booked
    /// - `Err(AppError::NotFound)` - No vehicle with that id
    pub async fn update(&self, id: i32, mut param: UpdateVehicleParam) -> Result<Vehicle, AppError> {
        let status = param.status.take();
        if let Some(status) = status {
            reject_booked_status(status)?;
        }

        let txn = self.db.begin().await?;
        let repo = VehicleRepository::new(&txn);

        if let Some(status) = status {
            if !repo.set_status_unless_booked(id, status).await? {
                return match repo.find_by_id(id).await? {
                    None => Err(vehicle_not_found()),
                    Some(_) => Err(AppError::Conflict("Vehicle is currently booked".to_string())),
                };
            }
        }

        let vehicle = repo.update(id, param).await?.ok_or_else(vehicle_not_found)?;
        txn.commit().await?;

        Ok(vehicle)
    }

    /// Soft-deletes a vehicle. Its row, bookings and reviews are kept.
    pub async fn deactivate(&self, id: i32) -> Result<(), AppError> {
        if !VehicleRepository::new(self.db).deactivate(id).await? {
            return Err(vehicle_not_found());
        }

        tracing::info!("Deactivated vehicle {}", id);

        Ok(())
    }
}

fn vehicle_not_found() -> AppError {
    AppError::NotFound("Vehicle not found".to_string())
}

fn reject_booked_status(status: VehicleStatus) -> Result<(), AppError> {
    if status == VehicleStatus::Booked {
        return Err(AppError::BadRequest(
            "Vehicles can only be booked through a booking".to_string(),
        ));
    }
    Ok(())
}
