pub mod model;
pub mod repository;

pub use model::{Trip, TripStatus};
pub use repository::TripRepository;
