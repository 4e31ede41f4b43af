pub mod dto;
pub mod handlers;

pub use dto::CancellationDto;
pub use handlers::CancellationAppState;
