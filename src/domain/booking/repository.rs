//! Booking repository interface

use async_trait::async_trait;

use super::model::{Booking, BookingStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Save a new booking
    async fn save(&self, booking: Booking) -> DomainResult<()>;

    /// Find booking by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>>;

    /// Update an existing booking
    async fn update(&self, booking: Booking) -> DomainResult<()>;

    /// All bookings, newest first
    async fn find_all(&self) -> DomainResult<Vec<Booking>>;

    /// One page of bookings (1-based page), optionally filtered by status.
    /// Returns the page plus the total row count for the filter.
    async fn find_page(
        &self,
        page: u64,
        limit: u64,
        status: Option<BookingStatus>,
    ) -> DomainResult<(Vec<Booking>, u64)>;
}
