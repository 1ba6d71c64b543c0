//! Admin dashboard, analytics and user management.
//!
//! The aggregate endpoints fan out independent read queries concurrently and fail as
//! a whole if any of them fails.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Utc};
use entity::booking::BookingStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, review::ReviewRepository, trip::TripRepository,
        user::UserRepository, vehicle::VehicleRepository,
    },
    error::AppError,
    model::{
        admin::{Analytics, DailyRevenue, Dashboard, DashboardStats},
        booking::Booking,
        page::{PageParam, Paginated},
        review::Review,
        trip::Trip,
        user::{User, UserFilter, UserWithCounts},
    },
};

/// Bookings shown on the dashboard and trips/bookings on the user detail page.
const RECENT_LIMIT: u64 = 10;
/// Entries in each analytics top list.
const TOP_LIMIT: u64 = 10;
/// Days covered by the revenue series.
const REVENUE_WINDOW_DAYS: i64 = 30;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Headline counts plus the most recent bookings.
    pub async fn dashboard(&self) -> Result<Dashboard, AppError> {
        let user_repo = UserRepository::new(self.db);
        let vehicle_repo = VehicleRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        let (total_users, total_vehicles, active_bookings, total_revenue, recent_bookings) = tokio::try_join!(
            user_repo.count(),
            vehicle_repo.count_active(),
            booking_repo.count_by_status(BookingStatus::Active),
            booking_repo.revenue_total(),
            booking_repo.recent(RECENT_LIMIT),
        )?;

        Ok(Dashboard {
            stats: DashboardStats {
                total_users,
                total_vehicles,
                active_bookings,
                total_revenue,
            },
            recent_bookings,
        })
    }

    /// Revenue per day for the last 30 days, top vehicles, top spenders and
    /// vehicles per city.
    pub async fn analytics(&self) -> Result<Analytics, AppError> {
        let user_repo = UserRepository::new(self.db);
        let vehicle_repo = VehicleRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        let since = Utc::now() - Duration::days(REVENUE_WINDOW_DAYS);

        let (completed, popular_vehicles, top_users, city_stats) = tokio::try_join!(
            booking_repo.completed_since(since),
            vehicle_repo.most_popular(TOP_LIMIT),
            user_repo.top_by_spent(TOP_LIMIT),
            vehicle_repo.count_by_city(),
        )?;

        Ok(Analytics {
            revenue_by_day: revenue_by_day(&completed),
            popular_vehicles,
            top_users,
            city_stats,
        })
    }

    /// Pages through users with their booking and trip counts.
    pub async fn list_users(
        &self,
        filter: UserFilter,
        page: PageParam,
    ) -> Result<Paginated<UserWithCounts>, AppError> {
        let users = UserRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;
        let ids: Vec<i32> = users.items.iter().map(|u| u.id).collect();

        let booking_repo = BookingRepository::new(self.db);
        let trip_repo = TripRepository::new(self.db);
        let (booking_counts, trip_counts) = tokio::try_join!(
            booking_repo.count_by_users(&ids),
            trip_repo.count_by_users(&ids),
        )?;

        Ok(users.map(|user| UserWithCounts {
            booking_count: booking_counts.get(&user.id).copied().unwrap_or(0),
            trip_count: trip_counts.get(&user.id).copied().unwrap_or(0),
            user,
        }))
    }

    /// A user with their 10 latest bookings and trips and all their reviews.
    ///
    /// # Returns
    /// - `Ok(..)` - User and related records
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn user_detail(
        &self,
        id: i32,
    ) -> Result<(User, Vec<Booking>, Vec<Trip>, Vec<Review>), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let booking_repo = BookingRepository::new(self.db);
        let trip_repo = TripRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);
        let (bookings, trips, reviews) = tokio::try_join!(
            booking_repo.get_by_user(id, Some(RECENT_LIMIT)),
            trip_repo.get_by_user(id, Some(RECENT_LIMIT)),
            review_repo.get_by_user(id),
        )?;

        Ok((user, bookings, trips, reviews))
    }

    /// Activates or deactivates an account.
    pub async fn set_user_status(&self, id: i32, is_active: bool) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_active(id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "User {} {}",
            id,
            if is_active { "activated" } else { "deactivated" }
        );

        Ok(user)
    }
}

/// Buckets completed bookings by UTC calendar day of creation, oldest day first.
/// Days without revenue are omitted.
fn revenue_by_day(bookings: &[Booking]) -> Vec<DailyRevenue> {
    let mut days: BTreeMap<NaiveDate, (f64, u64)> = BTreeMap::new();

    for booking in bookings {
        let entry = days.entry(booking.created_at.date_naive()).or_default();
        entry.0 += booking.total_price;
        entry.1 += 1;
    }

    days.into_iter()
        .map(|(date, (revenue, bookings))| DailyRevenue {
            date,
            revenue,
            bookings,
        })
        .collect()
}
