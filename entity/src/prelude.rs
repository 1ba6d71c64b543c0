pub use super::booking::Entity as Booking;
pub use super::review::Entity as Review;
pub use super::trip::Entity as Trip;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
