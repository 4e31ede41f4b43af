//! # Raajje Ferry Admin Service
//!
//! Back end for the admin console of an inter-island ferry booking
//! platform.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Services (cancellation/refund flow, booking edits)
//!   and outbound ports
//! - **infrastructure**: SeaORM persistence, in-memory storage, refund
//!   gateway HTTP client
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors, money helpers, graceful shutdown
//! - **config**: TOML configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
