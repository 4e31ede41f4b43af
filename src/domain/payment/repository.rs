//! Payment repository interface

use async_trait::async_trait;

use super::model::Payment;
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Save a new payment
    async fn save(&self, payment: Payment) -> DomainResult<()>;

    /// Find payment by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Payment>>;

    /// Update an existing payment
    async fn update(&self, payment: Payment) -> DomainResult<()>;

    /// All payments for a booking, newest first
    async fn find_for_booking(&self, booking_id: &str) -> DomainResult<Vec<Payment>>;

    /// Most recent completed payment for a booking, if any
    async fn find_latest_completed(&self, booking_id: &str) -> DomainResult<Option<Payment>>;
}
