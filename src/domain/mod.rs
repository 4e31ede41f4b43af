//! Core business entities, types and repository traits

pub mod booking;
pub mod cancellation;
pub mod payment;
pub mod route;
pub mod seat_reservation;
pub mod trip;
pub mod vessel;

// Re-export commonly used types
pub use booking::{Booking, BookingRepository, BookingStatus};
pub use cancellation::{
    BankDetails, CancellationRecord, CancellationRepository, CancellationStatus, RefundBreakdown,
    RefundMethod, RefundPolicy,
};
pub use payment::{Payment, PaymentMethod, PaymentRepository, PaymentStatus};
pub use route::{Route, RouteRepository};
pub use seat_reservation::{SeatReservation, SeatReservationRepository};
pub use trip::{Trip, TripRepository, TripStatus};
pub use vessel::{Vessel, VesselRepository};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let booking = repos.bookings().find_by_id("…").await?;
///     let payment = repos.payments().find_latest_completed(&booking.id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn bookings(&self) -> &dyn BookingRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn cancellations(&self) -> &dyn CancellationRepository;
    fn seat_reservations(&self) -> &dyn SeatReservationRepository;
    fn trips(&self) -> &dyn TripRepository;
    fn vessels(&self) -> &dyn VesselRepository;
    fn routes(&self) -> &dyn RouteRepository;
}
