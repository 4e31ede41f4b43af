//! Booking DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::BookingStats;
use crate::domain::Booking;
use crate::shared::money;

use super::super::cancellations::CancellationDto;

/// A booking as shown on the admin screens
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    /// Booking ID
    pub id: String,
    /// Short reference printed on tickets
    pub reference: String,
    /// Trip being travelled
    pub trip_id: String,
    /// Selling agent, if any
    pub agent_id: Option<String>,
    /// Lead passenger / contact name
    pub contact_name: String,
    /// Number of passengers
    pub passenger_count: i32,
    /// Total fare in laari
    pub total_fare: i64,
    /// Total fare formatted (e.g. "100.00 MVR")
    pub total_fare_formatted: String,
    /// Status: `pending_payment`, `confirmed`, `checked_in`, `completed`,
    /// `cancelled`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            reference: b.reference,
            trip_id: b.trip_id,
            agent_id: b.agent_id,
            contact_name: b.contact_name,
            passenger_count: b.passenger_count,
            total_fare: b.total_fare,
            total_fare_formatted: money::format_mvr(b.total_fare),
            status: b.status.as_str().to_string(),
            created_at: b.created_at,
            updated_at: b.updated_at,
            cancelled_at: b.cancelled_at,
        }
    }
}

/// List query parameters
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct BookingListParams {
    /// Page number (1-based). Default: 1
    pub page: Option<u64>,
    /// Items per page (1–100). Default: 50
    pub limit: Option<u64>,
    /// Filter by status (e.g. `confirmed`)
    pub status: Option<String>,
}

/// Dashboard counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingStatsDto {
    pub total: u64,
    pub pending_payment: u64,
    pub confirmed: u64,
    pub checked_in: u64,
    pub completed: u64,
    pub cancelled: u64,
    /// Fare volume of non-cancelled bookings, in laari
    pub revenue: i64,
    /// Revenue formatted (e.g. "12500.00 MVR")
    pub revenue_formatted: String,
}

impl From<BookingStats> for BookingStatsDto {
    fn from(s: BookingStats) -> Self {
        Self {
            total: s.total,
            pending_payment: s.pending_payment,
            confirmed: s.confirmed,
            checked_in: s.checked_in,
            completed: s.completed,
            cancelled: s.cancelled,
            revenue: s.revenue,
            revenue_formatted: money::format_mvr(s.revenue),
        }
    }
}

/// Admin edit of a booking's status
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingStatusRequest {
    /// New status: `pending_payment`, `confirmed`, `checked_in`, `completed`
    #[validate(length(min = 1))]
    pub status: String,
}

/// Request to cancel a booking
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CancelBookingRequest {
    /// Reason for the cancellation, shown on the record
    #[validate(length(min = 1, message = "reason must not be empty"))]
    pub reason: String,
    /// Refund policy: `full`, `half`, `none`
    #[validate(length(min = 1))]
    pub refund_policy: String,
    /// Payout channel: `gateway`, `bank_transfer`. Default: `gateway`
    pub refund_method: Option<String>,
    /// Bank account number for manual payouts
    pub bank_account_no: Option<String>,
    /// Bank account holder name
    pub bank_account_name: Option<String>,
    /// Bank name
    pub bank_name: Option<String>,
}

/// Result of the cancellation flow
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CancelBookingResponse {
    /// Booking after the flow
    pub booking: BookingDto,
    /// Final cancellation record
    pub cancellation: CancellationDto,
    /// Refund amount in laari
    pub refund_amount: i64,
    /// Refund amount formatted
    pub refund_formatted: String,
    /// Cancellation fee in laari
    pub cancellation_fee: i64,
    /// Whether the payment row was moved to refunded/partially_refunded
    pub payment_updated: bool,
    /// Non-fatal step failures, already logged server-side
    pub warnings: Vec<String>,
    /// Operator-facing summary line
    pub message: String,
}

/// Preview of a refund before confirming a cancellation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefundPreviewResponse {
    /// Policy previewed: `full`, `half`, `none`
    pub policy: String,
    /// Refund amount in laari
    pub refund_amount: i64,
    /// Refund amount formatted
    pub refund_formatted: String,
    /// Cancellation fee in laari
    pub cancellation_fee: i64,
    /// Fee formatted
    pub fee_formatted: String,
}
