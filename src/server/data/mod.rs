//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from the business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same methods run against
//! the connection pool or inside a `DatabaseTransaction`.

pub mod booking;
pub mod review;
pub mod trip;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
