//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary;
//! controllers convert them into DTOs. Parameter types carry validated input from
//! controllers into services.

pub mod admin;
pub mod booking;
pub mod page;
pub mod review;
pub mod trip;
pub mod user;
pub mod vehicle;
