use sea_orm::DatabaseConnection;

use crate::server::{data::trip::TripRepository, error::AppError, model::trip::Trip};

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's trips with vehicles, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Trip>, AppError> {
        Ok(TripRepository::new(self.db)
            .get_by_user(user_id, None)
            .await?)
    }
}
