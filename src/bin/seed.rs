//! Loads the admin account and the starter fleet.
//!
//! Safe to run repeatedly: rows are upserted by email and license plate.

use carshare::server::{
    config::Config,
    data::{user::UserRepository, vehicle::VehicleRepository},
    model::{user::CreateUserParam, vehicle::CreateVehicleParam},
    startup,
    util::password,
};
use entity::{user::UserRole, vehicle::VehicleStatus};

const ADMIN_EMAIL: &str = "admin@praguecarsharing.com";
const ADMIN_PASSWORD: &str = "admin123";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.environment);

    let db = startup::connect_to_database(&config).await?;

    let admin = UserRepository::new(&db)
        .upsert(CreateUserParam {
            email: ADMIN_EMAIL.to_string(),
            password_hash: password::hash_password(ADMIN_PASSWORD)?,
            name: "Admin User".to_string(),
            phone_number: None,
            drivers_license: None,
            role: UserRole::Admin,
        })
        .await?;
    tracing::info!("Admin user ready: {}", admin.email);

    let vehicle_repo = VehicleRepository::new(&db);
    let fleet = fleet();
    let count = fleet.len();
    for vehicle in fleet {
        let vehicle = vehicle_repo.upsert_by_plate(vehicle).await?;
        tracing::debug!("Vehicle ready: {} ({})", vehicle.name, vehicle.license_plate);
    }
    tracing::info!("Seeded {} vehicles", count);

    db.close().await?;

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    name: &str,
    brand: &str,
    model: &str,
    year: i32,
    license_plate: &str,
    city: &str,
    (latitude, longitude): (f64, f64),
    (per_minute, per_hour, per_day, per_week): (f64, f64, f64, f64),
    fuel_type: &str,
    transmission: &str,
    image_url: &str,
) -> CreateVehicleParam {
    CreateVehicleParam {
        name: name.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        license_plate: license_plate.to_string(),
        city: city.to_string(),
        latitude,
        longitude,
        price_per_minute: per_minute,
        price_per_hour: per_hour,
        price_per_day: per_day,
        price_per_week: per_week,
        fuel_type: fuel_type.to_string(),
        transmission: transmission.to_string(),
        seats: 5,
        image_url: Some(image_url.to_string()),
        battery_level: 100,
        fuel_level: 100,
        status: VehicleStatus::Available,
    }
}

fn fleet() -> Vec<CreateVehicleParam> {
    vec![
        vehicle(
            "Tesla Model 3",
            "Tesla",
            "Model 3",
            2023,
            "PRG-TS-001",
            "Prague",
            (50.0875, 14.4213),
            (0.35, 15.0, 80.0, 450.0),
            "electric",
            "automatic",
            "https://images.unsplash.com/photo-1560958089-b8a1929cea89",
        ),
        vehicle(
            "BMW 3 Series",
            "BMW",
            "3 Series",
            2022,
            "PRG-BM-002",
            "Prague",
            (50.088, 14.425),
            (0.40, 18.0, 90.0, 500.0),
            "petrol",
            "automatic",
            "https://images.unsplash.com/photo-1555215695-3004980ad54e",
        ),
        vehicle(
            "Škoda Octavia",
            "Škoda",
            "Octavia",
            2023,
            "BRN-SK-001",
            "Brno",
            (49.1951, 16.6068),
            (0.30, 12.0, 70.0, 400.0),
            "petrol",
            "manual",
            "https://images.unsplash.com/photo-1583121274602-3e2820c69888",
        ),
        vehicle(
            "Volkswagen Golf",
            "Volkswagen",
            "Golf",
            2022,
            "KV-VW-001",
            "Karlovy Vary",
            (50.2329, 12.8716),
            (0.28, 10.0, 65.0, 380.0),
            "diesel",
            "manual",
            "https://images.unsplash.com/photo-1552519507-da3b142c6e3d",
        ),
    ]
}
