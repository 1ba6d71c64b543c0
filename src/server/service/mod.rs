//! Business logic services.
//!
//! Services sit between controllers and repositories. They take domain parameters,
//! enforce the business rules (availability, ownership, rating bounds), open
//! transactions where several writes must land together and map repository results
//! into `AppError`s.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod review;
pub mod trip;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
