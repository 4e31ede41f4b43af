pub mod common;
pub mod modules;
pub mod router;

pub use common::{ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson};
pub use router::{create_api_router, ApiDoc};
