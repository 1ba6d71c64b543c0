//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let vehicle = factory::create_vehicle(&db).await?;
//! let booking = factory::create_booking(&db, user.id, vehicle.id).await?;
//!
//! let (user, vehicle, booking) =
//!     factory::helpers::create_booking_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("root@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let ev = factory::vehicle::VehicleFactory::new(&db)
//!     .city("Brno")
//!     .status(VehicleStatus::Charging)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `vehicle` - Create vehicle entities
//! - `booking` - Create booking entities
//! - `trip` - Create trip entities
//! - `review` - Create review entities
//! - `helpers` - Unique id counter and dependency helpers

pub mod booking;
pub mod helpers;
pub mod review;
pub mod trip;
pub mod user;
pub mod vehicle;

pub use booking::create_booking;
pub use review::create_review;
pub use trip::create_trip;
pub use user::{create_admin, create_user};
pub use vehicle::create_vehicle;
