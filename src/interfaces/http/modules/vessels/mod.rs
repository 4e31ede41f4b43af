pub mod dto;
pub mod handlers;

pub use dto::VesselDto;
pub use handlers::VesselAppState;
