//! Prague Carsharing API.
//!
//! REST backend for a vehicle-sharing marketplace: accounts, a vehicle catalog with
//! live location and status, bookings that reserve a vehicle exclusively, trip
//! history, reviews and an admin panel.
//!
//! - [`model`] - Request and response DTOs
//! - [`server`] - Configuration, routing, services and persistence

pub mod model;
pub mod server;
