use chrono::NaiveDate;
use entity::{booking::BookingStatus, user::UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    api::PaginationDto, booking::BookingDto, review::ReviewDto, trip::TripDto, user::UserDto,
    vehicle::VehicleDto,
};

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub stats: DashboardStatsDto,
    pub recent_bookings: Vec<BookingDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_users: u64,
    pub total_vehicles: u64,
    pub active_bookings: u64,
    pub total_revenue: f64,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct AdminUserQueryDto {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    #[schema(value_type = Option<String>)]
    pub role: Option<UserRole>,
}

/// User row in the admin listing, with relation counts.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub booking_count: u64,
    pub trip_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AdminUserListDto {
    pub users: Vec<AdminUserDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AdminUserDetailDto {
    pub user: UserDto,
    pub bookings: Vec<BookingDto>,
    pub trips: Vec<TripDto>,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusDto {
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminVehicleDto {
    #[serde(flatten)]
    pub vehicle: VehicleDto,
    pub booking_count: u64,
    pub trip_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AdminVehicleListDto {
    pub vehicles: Vec<AdminVehicleDto>,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct AdminBookingQueryDto {
    #[schema(value_type = Option<String>)]
    pub status: Option<BookingStatus>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AdminBookingListDto {
    pub bookings: Vec<BookingDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDto {
    pub revenue_by_day: Vec<DailyRevenueDto>,
    pub popular_vehicles: Vec<PopularVehicleDto>,
    pub top_users: Vec<TopUserDto>,
    pub city_stats: Vec<CityStatDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DailyRevenueDto {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub revenue: f64,
    pub bookings: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PopularVehicleDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub total_trips: i32,
    pub rating: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub total_trips: i32,
    pub total_spent: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CityStatDto {
    pub city: String,
    pub count: u64,
}
