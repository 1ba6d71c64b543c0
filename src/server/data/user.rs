//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, profile updates, activation, lifetime totals and the
//! admin listings, converting entity models to domain models at the boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    page::{PageParam, Paginated},
    user::{CreateUserParam, UpdateProfileParam, User, UserCredentials, UserFilter},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `param` - Account fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            phone_number: ActiveValue::Set(param.phone_number),
            drivers_license: ActiveValue::Set(param.drivers_license),
            role: ActiveValue::Set(param.role),
            is_active: ActiveValue::Set(true),
            total_trips: ActiveValue::Set(0),
            total_spent: ActiveValue::Set(0.0),
            member_since: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Inserts an account or, when the email already exists, refreshes its password,
    /// name and role.
    ///
    /// # Arguments
    /// - `param` - Account fields keyed by email
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            phone_number: ActiveValue::Set(param.phone_number),
            drivers_license: ActiveValue::Set(param.drivers_license),
            role: ActiveValue::Set(param.role),
            is_active: ActiveValue::Set(true),
            total_trips: ActiveValue::Set(0),
            total_spent: ActiveValue::Set(0.0),
            member_since: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_columns([
                    entity::user::Column::PasswordHash,
                    entity::user::Column::Name,
                    entity::user::Column::Role,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email, for login.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Applies the provided profile fields.
    ///
    /// An empty update performs no write and returns the stored user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user after the update
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(User::from_entity(entity)));
        }

        let mut active_model: entity::user::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone_number) = param.phone_number {
            active_model.phone_number = ActiveValue::Set(Some(phone_number));
        }
        if let Some(drivers_license) = param.drivers_license {
            active_model.drivers_license = ActiveValue::Set(Some(drivers_license));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Activates or deactivates an account.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.is_active = ActiveValue::Set(is_active);
        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Adds one completed trip and its price to the user's lifetime totals.
    ///
    /// The increment is evaluated by the database so concurrent completions never
    /// overwrite each other.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `amount` - Price of the completed booking
    ///
    /// # Returns
    /// - `Ok(())` - Totals updated (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_trip(&self, id: i32, amount: f64) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::TotalTrips,
                Expr::cust_with_values("total_trips + ?", [1i32]),
            )
            .col_expr(
                entity::user::Column::TotalSpent,
                Expr::cust_with_values("total_spent + ?", [amount]),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a page of users, newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional search text (email or name, case-insensitive) and role
    /// - `page` - Page to fetch
    ///
    /// # Returns
    /// - `Ok(Paginated<User>)` - Users on the page with totals
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &UserFilter,
        page: PageParam,
    ) -> Result<Paginated<User>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Email.contains(search))
                    .add(entity::user::Column::Name.contains(search)),
            );
        }
        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page.index()).await?;

        Ok(Paginated::new(
            users.into_iter().map(User::from_entity).collect(),
            total,
            page,
        ))
    }

    /// Counts all registered users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Gets the users with the highest lifetime spend.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of users returned
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users ordered by `total_spent` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn top_by_spent(&self, limit: u64) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::TotalSpent)
            .order_by_asc(entity::user::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }
}
