use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Vehicle};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Vehicle)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to exercise vehicle catalog operations.
    ///
    /// Adds `User`, `Vehicle` and `Review` so vehicle detail lookups can join the
    /// latest reviews and their authors.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_vehicle_tables(self) -> Self {
        self.with_table(User).with_table(Vehicle).with_table(Review)
    }

    /// Adds every table of the rental domain in dependency order.
    ///
    /// - User
    /// - Vehicle
    /// - Booking
    /// - Trip
    /// - Review
    ///
    /// Use this for booking lifecycle, admin reporting and HTTP tests.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_rental_tables(self) -> Self {
        self.with_table(User)
            .with_table(Vehicle)
            .with_table(Booking)
            .with_table(Trip)
            .with_table(Review)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }

    /// Builds the configured tables in a file-backed database with a multi-connection pool.
    ///
    /// Use this when a test needs real concurrent transactions; the in-memory
    /// database from `build()` is limited to a single connection.
    ///
    /// # Arguments
    /// - `max_connections` - Pool size
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with tables created
    /// - `Err(TestError)` - Failed to create the database file or the tables
    pub async fn build_file_backed(self, max_connections: u32) -> Result<TestContext, TestError> {
        let mut setup = TestContext::file_backed(max_connections).await?;

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
