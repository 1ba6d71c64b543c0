//! Request and response DTOs shared by the HTTP layer and the OpenAPI document.
//!
//! All payloads are serialized with camelCase keys. Status enums reuse the entity
//! enums, which serialize as upper-case strings (`"AVAILABLE"`, `"ACTIVE"`, ...).

pub mod admin;
pub mod api;
pub mod auth;
pub mod booking;
pub mod review;
pub mod trip;
pub mod user;
pub mod vehicle;
