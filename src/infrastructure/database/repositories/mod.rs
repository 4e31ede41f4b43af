pub mod booking_repository;
pub mod cancellation_repository;
pub mod payment_repository;
pub mod repository_provider;
pub mod route_repository;
pub mod seat_reservation_repository;
pub mod trip_repository;
pub mod vessel_repository;

pub use booking_repository::SeaOrmBookingRepository;
pub use cancellation_repository::SeaOrmCancellationRepository;
pub use payment_repository::SeaOrmPaymentRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use route_repository::SeaOrmRouteRepository;
pub use seat_reservation_repository::SeaOrmSeatReservationRepository;
pub use trip_repository::SeaOrmTripRepository;
pub use vessel_repository::SeaOrmVesselRepository;

use crate::domain::DomainError;

/// Map a SeaORM error into the domain error space. The prefix matters:
/// `DomainError::is_transient` keys off it.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}
