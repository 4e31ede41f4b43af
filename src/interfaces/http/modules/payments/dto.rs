//! Payment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Payment;
use crate::shared::money;

/// A payment against a booking
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    /// Payment ID
    pub id: String,
    /// Booking paid for
    pub booking_id: String,
    /// Amount in laari
    pub amount: i64,
    /// Amount formatted (e.g. "100.00 MVR")
    pub amount_formatted: String,
    /// Method: `card`, `wallet`, `bank_transfer`, `cash`
    pub method: String,
    /// Status: `pending`, `completed`, `failed`, `cancelled`, `refunded`,
    /// `partially_refunded`
    pub status: String,
    /// Gateway receipt number
    pub receipt_no: Option<String>,
    /// Gateway transaction reference
    pub gateway_ref: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            booking_id: p.booking_id,
            amount: p.amount,
            amount_formatted: money::format_mvr(p.amount),
            method: p.method.as_str().to_string(),
            status: p.status.as_str().to_string(),
            receipt_no: p.receipt_no,
            gateway_ref: p.gateway_ref,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
