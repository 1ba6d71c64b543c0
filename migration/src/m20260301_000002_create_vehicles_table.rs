use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Name))
                    .col(string(Vehicle::Brand))
                    .col(string(Vehicle::Model))
                    .col(integer(Vehicle::Year))
                    .col(string_uniq(Vehicle::LicensePlate))
                    .col(string(Vehicle::City))
                    .col(double(Vehicle::Latitude))
                    .col(double(Vehicle::Longitude))
                    .col(double(Vehicle::PricePerMinute))
                    .col(double(Vehicle::PricePerHour))
                    .col(double(Vehicle::PricePerDay))
                    .col(double(Vehicle::PricePerWeek))
                    .col(string(Vehicle::FuelType))
                    .col(string(Vehicle::Transmission))
                    .col(integer(Vehicle::Seats))
                    .col(string_null(Vehicle::ImageUrl))
                    .col(string_len(Vehicle::Status, 16).default("AVAILABLE"))
                    .col(boolean(Vehicle::IsActive).default(true))
                    .col(integer(Vehicle::BatteryLevel).default(100))
                    .col(integer(Vehicle::FuelLevel).default(100))
                    .col(double(Vehicle::Rating).default(0.0))
                    .col(integer(Vehicle::ReviewCount).default(0))
                    .col(integer(Vehicle::TotalTrips).default(0))
                    .col(
                        timestamp(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Vehicle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicles_city_status")
                    .table(Vehicle::Table)
                    .col(Vehicle::City)
                    .col(Vehicle::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    Id,
    Name,
    Brand,
    Model,
    Year,
    LicensePlate,
    City,
    Latitude,
    Longitude,
    PricePerMinute,
    PricePerHour,
    PricePerDay,
    PricePerWeek,
    FuelType,
    Transmission,
    Seats,
    ImageUrl,
    Status,
    IsActive,
    BatteryLevel,
    FuelLevel,
    Rating,
    ReviewCount,
    TotalTrips,
    CreatedAt,
    UpdatedAt,
}
