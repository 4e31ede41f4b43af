//! Cancellation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CancellationRecord;
use crate::shared::money;

/// A cancellation ledger entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CancellationDto {
    /// Record ID
    pub id: String,
    /// Cancelled booking ID
    pub booking_id: String,
    /// Operator-entered reason
    pub reason: String,
    /// Refund amount in laari
    pub refund_amount: i64,
    /// Refund amount formatted (e.g. "50.00 MVR")
    pub refund_formatted: String,
    /// Cancellation fee in laari
    pub cancellation_fee: i64,
    /// Record status: `pending`, `no_payment`, `refund_failed`
    pub status: String,
    /// Payout channel: `gateway` or `bank_transfer`
    pub refund_method: Option<String>,
    /// Bank account number for manual payouts
    pub bank_account_no: Option<String>,
    /// Bank account holder name
    pub bank_account_name: Option<String>,
    /// Bank name
    pub bank_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CancellationRecord> for CancellationDto {
    fn from(r: CancellationRecord) -> Self {
        let (bank_account_no, bank_account_name, bank_name) = match r.bank_details {
            Some(d) => (Some(d.account_no), Some(d.account_name), Some(d.bank_name)),
            None => (None, None, None),
        };
        Self {
            id: r.id,
            booking_id: r.booking_id,
            reason: r.reason,
            refund_amount: r.refund_amount,
            refund_formatted: money::format_mvr(r.refund_amount),
            cancellation_fee: r.cancellation_fee,
            status: r.status.as_str().to_string(),
            refund_method: r.refund_method.map(|m| m.as_str().to_string()),
            bank_account_no,
            bank_account_name,
            bank_name,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
