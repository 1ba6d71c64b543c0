//! Aggregates shown on the admin dashboard and analytics pages.

use chrono::NaiveDate;

use crate::{
    model::admin::{CityStatDto, DailyRevenueDto, DashboardStatsDto},
    server::model::{booking::Booking, user::User, vehicle::Vehicle},
};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_users: u64,
    /// Vehicles that have not been soft-deleted.
    pub total_vehicles: u64,
    pub active_bookings: u64,
    /// Sum of `total_price` over completed bookings.
    pub total_revenue: f64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_users: self.total_users,
            total_vehicles: self.total_vehicles,
            active_bookings: self.active_bookings,
            total_revenue: self.total_revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_bookings: Vec<Booking>,
}

/// Completed-booking revenue for one calendar day (UTC).
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
    pub bookings: u64,
}

impl DailyRevenue {
    pub fn into_dto(self) -> DailyRevenueDto {
        DailyRevenueDto {
            date: self.date,
            revenue: self.revenue,
            bookings: self.bookings,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityStat {
    pub city: String,
    pub count: u64,
}

impl CityStat {
    pub fn into_dto(self) -> CityStatDto {
        CityStatDto {
            city: self.city,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub revenue_by_day: Vec<DailyRevenue>,
    pub popular_vehicles: Vec<Vehicle>,
    pub top_users: Vec<User>,
    pub city_stats: Vec<CityStat>,
}
