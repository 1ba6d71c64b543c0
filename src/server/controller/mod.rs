//! HTTP handlers.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into domain params, call a service and convert the result back into
//! a DTO. They hold no business rules of their own.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod extract;
pub mod review;
pub mod root;
pub mod trip;
pub mod user;
pub mod vehicle;
