//! Outbound ports
//!
//! Interfaces the application layer needs from the outside world. The only
//! one today is the payment processor's refund function.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// A refund to push back through the payment processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundRequest {
    /// Booking the refund belongs to
    pub booking_id: String,
    /// Amount in the currency's minor unit (laari)
    pub amount: i64,
    /// ISO 4217 currency code
    pub currency: String,
}

/// Result reported by the refund function
#[derive(Debug, Clone)]
pub struct RefundResult {
    /// Whether the processor accepted the refund
    pub success: bool,
    /// Processor-supplied detail, if any
    pub message: Option<String>,
}

/// External refund function.
///
/// `Err` means the call itself failed (transport, timeout, non-2xx);
/// `Ok(RefundResult { success: false, .. })` means the processor answered
/// and declined. The cancellation flow treats both the same way.
#[async_trait]
pub trait RefundGateway: Send + Sync {
    async fn process_refund(&self, request: RefundRequest) -> DomainResult<RefundResult>;
}
