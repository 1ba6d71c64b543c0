use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_users_table::User, m20260301_000002_create_vehicles_table::Vehicle,
    m20260301_000003_create_bookings_table::Booking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(integer(Trip::UserId))
                    .col(integer(Trip::VehicleId))
                    .col(integer_uniq(Trip::BookingId))
                    .col(timestamp(Trip::StartTime))
                    .col(timestamp(Trip::EndTime))
                    .col(integer(Trip::DurationMinutes))
                    .col(double(Trip::Cost))
                    .col(double_null(Trip::DistanceKm))
                    .col(
                        timestamp(Trip::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_user_id")
                            .from(Trip::Table, Trip::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_vehicle_id")
                            .from(Trip::Table, Trip::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_booking_id")
                            .from(Trip::Table, Trip::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    #[sea_orm(iden = "trips")]
    Table,
    Id,
    UserId,
    VehicleId,
    BookingId,
    StartTime,
    EndTime,
    DurationMinutes,
    Cost,
    DistanceKm,
    CreatedAt,
}
