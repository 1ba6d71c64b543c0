//! Vehicle data repository.
//!
//! Besides plain CRUD this repository owns the availability transitions. Reserving
//! and releasing a vehicle are single conditional updates, so callers learn from the
//! affected row count whether the transition happened.

use chrono::Utc;
use entity::vehicle::VehicleStatus;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    admin::CityStat,
    page::{PageParam, Paginated},
    vehicle::{CreateVehicleParam, UpdateVehicleParam, Vehicle, VehicleFilter},
};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle with zeroed rating and trip counters.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(DbErr)` - Database error, including a unique violation on license plate
    pub async fn create(&self, param: CreateVehicleParam) -> Result<Vehicle, DbErr> {
        let entity = Self::new_active_model(param).insert(self.db).await?;

        Ok(Vehicle::from_entity(entity))
    }

    /// Inserts a vehicle or, when the license plate already exists, refreshes its
    /// descriptive fields and prices. Operational state is left as stored.
    pub async fn upsert_by_plate(&self, param: CreateVehicleParam) -> Result<Vehicle, DbErr> {
        use entity::vehicle::Column;

        let entity = entity::prelude::Vehicle::insert(Self::new_active_model(param))
            .on_conflict(
                OnConflict::column(Column::LicensePlate)
                    .update_columns([
                        Column::Name,
                        Column::Brand,
                        Column::Model,
                        Column::Year,
                        Column::City,
                        Column::PricePerMinute,
                        Column::PricePerHour,
                        Column::PricePerDay,
                        Column::PricePerWeek,
                        Column::FuelType,
                        Column::Transmission,
                        Column::Seats,
                        Column::ImageUrl,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(Vehicle::from_entity(entity))
    }

    fn new_active_model(param: CreateVehicleParam) -> entity::vehicle::ActiveModel {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(param.name),
            brand: ActiveValue::Set(param.brand),
            model: ActiveValue::Set(param.model),
            year: ActiveValue::Set(param.year),
            license_plate: ActiveValue::Set(param.license_plate),
            city: ActiveValue::Set(param.city),
            latitude: ActiveValue::Set(param.latitude),
            longitude: ActiveValue::Set(param.longitude),
            price_per_minute: ActiveValue::Set(param.price_per_minute),
            price_per_hour: ActiveValue::Set(param.price_per_hour),
            price_per_day: ActiveValue::Set(param.price_per_day),
            price_per_week: ActiveValue::Set(param.price_per_week),
            fuel_type: ActiveValue::Set(param.fuel_type),
            transmission: ActiveValue::Set(param.transmission),
            seats: ActiveValue::Set(param.seats),
            image_url: ActiveValue::Set(param.image_url),
            status: ActiveValue::Set(param.status),
            is_active: ActiveValue::Set(true),
            battery_level: ActiveValue::Set(param.battery_level),
            fuel_level: ActiveValue::Set(param.fuel_level),
            rating: ActiveValue::Set(0.0),
            review_count: ActiveValue::Set(0),
            total_trips: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }

    /// Finds a vehicle by id, including soft-deleted vehicles.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Gets a page of vehicles matching the filter, newest first.
    ///
    /// # Arguments
    /// - `filter` - City, status and soft-delete filters
    /// - `page` - Page to fetch
    ///
    /// # Returns
    /// - `Ok(Paginated<Vehicle>)` - Vehicles on the page with totals
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_filtered(
        &self,
        filter: &VehicleFilter,
        page: PageParam,
    ) -> Result<Paginated<Vehicle>, DbErr> {
        let mut query = entity::prelude::Vehicle::find();

        if filter.active_only {
            query = query.filter(entity::vehicle::Column::IsActive.eq(true));
        }
        if let Some(city) = &filter.city {
            query = query.filter(entity::vehicle::Column::City.eq(city.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::vehicle::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::vehicle::Column::CreatedAt)
            .order_by_desc(entity::vehicle::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let vehicles = paginator.fetch_page(page.index()).await?;

        Ok(Paginated::new(
            vehicles.into_iter().map(Vehicle::from_entity).collect(),
            total,
            page,
        ))
    }

    /// Gets every vehicle, newest first, including soft-deleted ones.
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        let vehicles = entity::prelude::Vehicle::find()
            .order_by_desc(entity::vehicle::Column::CreatedAt)
            .order_by_desc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(vehicles.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - The vehicle after the update
    /// - `Ok(None)` - No vehicle with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateVehicleParam,
    ) -> Result<Option<Vehicle>, DbErr> {
        let Some(entity) = entity::prelude::Vehicle::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut am: entity::vehicle::ActiveModel = entity.into();
        if let Some(v) = param.name {
            am.name = ActiveValue::Set(v);
        }
        if let Some(v) = param.brand {
            am.brand = ActiveValue::Set(v);
        }
        if let Some(v) = param.model {
            am.model = ActiveValue::Set(v);
        }
        if let Some(v) = param.year {
            am.year = ActiveValue::Set(v);
        }
        if let Some(v) = param.city {
            am.city = ActiveValue::Set(v);
        }
        if let Some(v) = param.latitude {
            am.latitude = ActiveValue::Set(v);
        }
        if let Some(v) = param.longitude {
            am.longitude = ActiveValue::Set(v);
        }
        if let Some(v) = param.price_per_minute {
            am.price_per_minute = ActiveValue::Set(v);
        }
        if let Some(v) = param.price_per_hour {
            am.price_per_hour = ActiveValue::Set(v);
        }
        if let Some(v) = param.price_per_day {
            am.price_per_day = ActiveValue::Set(v);
        }
        if let Some(v) = param.price_per_week {
            am.price_per_week = ActiveValue::Set(v);
        }
        if let Some(v) = param.fuel_type {
            am.fuel_type = ActiveValue::Set(v);
        }
        if let Some(v) = param.transmission {
            am.transmission = ActiveValue::Set(v);
        }
        if let Some(v) = param.seats {
            am.seats = ActiveValue::Set(v);
        }
        if let Some(v) = param.image_url {
            am.image_url = ActiveValue::Set(Some(v));
        }
        if let Some(v) = param.battery_level {
            am.battery_level = ActiveValue::Set(v);
        }
        if let Some(v) = param.fuel_level {
            am.fuel_level = ActiveValue::Set(v);
        }
        if let Some(v) = param.status {
            am.status = ActiveValue::Set(v);
        }
        if let Some(v) = param.is_active {
            am.is_active = ActiveValue::Set(v);
        }
        am.updated_at = ActiveValue::Set(Utc::now());

        let entity = am.update(self.db).await?;

        Ok(Some(Vehicle::from_entity(entity)))
    }

    /// Moves a vehicle to new coordinates.
    pub async fn update_location(
        &self,
        id: i32,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Vehicle>, DbErr> {
        self.update(
            id,
            UpdateVehicleParam {
                latitude: Some(latitude),
                longitude: Some(longitude),
                ..Default::default()
            },
        )
        .await
    }

    /// Sets an operational status unless the vehicle is currently booked.
    ///
    /// # Returns
    /// - `Ok(true)` - Status written
    /// - `Ok(false)` - Vehicle missing or in `BOOKED`
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status_unless_booked(
        &self,
        id: i32,
        status: VehicleStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .col_expr(entity::vehicle::Column::Status, Expr::value(status))
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::vehicle::Column::Id.eq(id))
            .filter(entity::vehicle::Column::Status.ne(VehicleStatus::Booked))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Atomically moves an active vehicle from `AVAILABLE` to `BOOKED`.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller reserved the vehicle
    /// - `Ok(false)` - Vehicle missing, deactivated or not available
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_reserve(&self, id: i32) -> Result<bool, DbErr> {
        self.transition(id, VehicleStatus::Available, VehicleStatus::Booked, true)
            .await
    }

    /// Moves a vehicle from `BOOKED` back to `AVAILABLE`.
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle released
    /// - `Ok(false)` - Vehicle was not booked
    /// - `Err(DbErr)` - Database error during update
    pub async fn release(&self, id: i32) -> Result<bool, DbErr> {
        self.transition(id, VehicleStatus::Booked, VehicleStatus::Available, false)
            .await
    }

    async fn transition(
        &self,
        id: i32,
        from: VehicleStatus,
        to: VehicleStatus,
        require_active: bool,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Vehicle::update_many()
            .col_expr(entity::vehicle::Column::Status, Expr::value(to))
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::vehicle::Column::Id.eq(id))
            .filter(entity::vehicle::Column::Status.eq(from));

        if require_active {
            query = query.filter(entity::vehicle::Column::IsActive.eq(true));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Adds one completed trip to the vehicle's counter.
    pub async fn increment_trips(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Vehicle::update_many()
            .col_expr(
                entity::vehicle::Column::TotalTrips,
                Expr::cust_with_values("total_trips + ?", [1i32]),
            )
            .filter(entity::vehicle::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Folds a new review rating into the vehicle's running mean.
    ///
    /// Both columns are computed from the row's current values in one statement:
    /// `rating + (r - rating) / (review_count + 1)` and `review_count + 1`.
    ///
    /// # Returns
    /// - `Ok(true)` - Rating updated
    /// - `Ok(false)` - No vehicle with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_rating(&self, id: i32, rating: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .col_expr(
                entity::vehicle::Column::Rating,
                Expr::cust_with_values(
                    "rating + (? - rating) / (review_count + 1)",
                    [f64::from(rating)],
                ),
            )
            .col_expr(
                entity::vehicle::Column::ReviewCount,
                Expr::cust_with_values("review_count + ?", [1i32]),
            )
            .filter(entity::vehicle::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Soft-deletes a vehicle by clearing `is_active`.
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle deactivated
    /// - `Ok(false)` - No vehicle with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .col_expr(entity::vehicle::Column::IsActive, Expr::value(false))
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::vehicle::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Counts vehicles that have not been soft-deleted.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }

    /// Gets the vehicles with the most completed trips.
    pub async fn most_popular(&self, limit: u64) -> Result<Vec<Vehicle>, DbErr> {
        let vehicles = entity::prelude::Vehicle::find()
            .order_by_desc(entity::vehicle::Column::TotalTrips)
            .order_by_desc(entity::vehicle::Column::Rating)
            .order_by_asc(entity::vehicle::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(vehicles.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Counts active vehicles per city, largest fleet first.
    pub async fn count_by_city(&self) -> Result<Vec<CityStat>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::Vehicle::find()
            .select_only()
            .column(entity::vehicle::Column::City)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(entity::vehicle::Column::IsActive.eq(true))
            .group_by(entity::vehicle::Column::City)
            .order_by_desc(Expr::cust("COUNT(*)"))
            .order_by_asc(entity::vehicle::Column::City)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(city, count)| CityStat {
                city,
                count: count.max(0) as u64,
            })
            .collect())
    }
}
