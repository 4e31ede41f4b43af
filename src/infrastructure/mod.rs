pub mod database;
pub mod gateway;
pub mod storage;

pub use database::{init_database, DatabaseConfig};
pub use gateway::HttpRefundGateway;
pub use storage::InMemoryRepositories;
