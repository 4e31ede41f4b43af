//! Seat reservation repository interface

use async_trait::async_trait;

use super::model::SeatReservation;
use crate::domain::DomainResult;

#[async_trait]
pub trait SeatReservationRepository: Send + Sync {
    /// Save a new seat reservation row
    async fn save(&self, seat: SeatReservation) -> DomainResult<()>;

    /// All seats held by a booking
    async fn find_for_booking(&self, booking_id: &str) -> DomainResult<Vec<SeatReservation>>;

    /// All seats of a trip, ordered by seat number
    async fn find_for_trip(&self, trip_id: &str) -> DomainResult<Vec<SeatReservation>>;

    /// Release every seat held by a booking (available = true, booking
    /// reference cleared). Returns the number of rows released.
    async fn release_for_booking(&self, booking_id: &str) -> DomainResult<u64>;
}
