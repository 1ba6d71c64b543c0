//! SeaORM entities for the carsharing database.

pub mod prelude;

pub mod booking;
pub mod review;
pub mod trip;
pub mod user;
pub mod vehicle;
