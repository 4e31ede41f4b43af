//! Cancellation repository interface

use async_trait::async_trait;

use super::model::CancellationRecord;
use crate::domain::DomainResult;

#[async_trait]
pub trait CancellationRepository: Send + Sync {
    /// Insert the record, or update the existing record for the same
    /// booking. Returns the stored record (with the surviving ID and
    /// created_at when an earlier record existed).
    async fn upsert_for_booking(
        &self,
        record: CancellationRecord,
    ) -> DomainResult<CancellationRecord>;

    /// Update an existing record
    async fn update(&self, record: CancellationRecord) -> DomainResult<()>;

    /// Find record by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<CancellationRecord>>;

    /// Find the record for a booking, if the booking was ever cancelled
    async fn find_by_booking(&self, booking_id: &str) -> DomainResult<Option<CancellationRecord>>;

    /// One page of records, newest first, plus the total count
    async fn find_page(&self, page: u64, limit: u64)
        -> DomainResult<(Vec<CancellationRecord>, u64)>;
}
