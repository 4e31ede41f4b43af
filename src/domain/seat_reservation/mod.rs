pub mod model;
pub mod repository;

pub use model::SeatReservation;
pub use repository::SeatReservationRepository;
