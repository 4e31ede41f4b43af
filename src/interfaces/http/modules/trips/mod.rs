pub mod dto;
pub mod handlers;

pub use dto::{SeatReservationDto, TripDto};
pub use handlers::TripAppState;
