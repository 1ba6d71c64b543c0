//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transaction boundaries
//! - **Data Layer** (`data/`) - Repositories converting entities into domain models
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication and the role policy
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token settings)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown
//! - **Router** (`router`) - Route table, middleware layers and API documentation
//! - **Utilities** (`util/`) - Token signing and password hashing
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** authenticates via `AuthGuard`, converts DTOs to params, calls a service
//! 3. **Service** applies business rules, opening a transaction where writes must be atomic
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model into a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
