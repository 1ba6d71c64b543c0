use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string(User::Name))
                    .col(string_null(User::PhoneNumber))
                    .col(string_null(User::DriversLicense))
                    .col(string_len(User::Role, 16).default("USER"))
                    .col(boolean(User::IsActive).default(true))
                    .col(integer(User::TotalTrips).default(0))
                    .col(double(User::TotalSpent).default(0.0))
                    .col(
                        timestamp(User::MemberSince)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    PhoneNumber,
    DriversLicense,
    Role,
    IsActive,
    TotalTrips,
    TotalSpent,
    MemberSince,
    CreatedAt,
}
