pub mod model;
pub mod repository;

pub use model::Vessel;
pub use repository::VesselRepository;
