pub mod model;
pub mod repository;

pub use model::Route;
pub use repository::RouteRepository;
