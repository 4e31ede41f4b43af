//! Cancellation domain entity
//!
//! One record per cancelled booking, capturing how much was refunded and
//! through which channel. The record is the audit trail the refunds screen
//! reads.

use chrono::{DateTime, Utc};

use crate::shared::money;

/// Operator-selected refund policy when cancelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundPolicy {
    /// Refund the full fare
    Full,
    /// Refund half the fare, rounded to the laari
    Half,
    /// No refund
    None,
}

impl RefundPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "full" => Some(Self::Full),
            "half" => Some(Self::Half),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Refund amount for a fare under this policy
    pub fn refund_amount(&self, total_fare: i64) -> i64 {
        match self {
            Self::Full => total_fare,
            Self::Half => money::half_rounded(total_fare),
            Self::None => 0,
        }
    }
}

impl std::fmt::Display for RefundPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the refund is paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundMethod {
    /// Back through the original payment gateway
    Gateway,
    /// Manual bank transfer by the finance team
    BankTransfer,
}

impl RefundMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gateway => "gateway",
            Self::BankTransfer => "bank_transfer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gateway" => Some(Self::Gateway),
            "bank_transfer" => Some(Self::BankTransfer),
            _ => None,
        }
    }
}

impl std::fmt::Display for RefundMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Passenger bank account for a manual refund
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDetails {
    pub account_no: String,
    pub account_name: String,
    pub bank_name: String,
}

/// Refund amount and cancellation fee for a fare under a policy.
///
/// Both the confirmation-dialog preview and the cancellation flow itself go
/// through this constructor, so the number the operator approves is the
/// number that gets refunded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefundBreakdown {
    /// Amount paid back, in laari
    pub refund_amount: i64,
    /// Fare kept by the operator, in laari
    pub cancellation_fee: i64,
}

impl RefundBreakdown {
    pub fn for_policy(policy: RefundPolicy, total_fare: i64) -> Self {
        let refund_amount = policy.refund_amount(total_fare);
        Self {
            refund_amount,
            cancellation_fee: total_fare - refund_amount,
        }
    }
}

/// Cancellation record status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationStatus {
    /// Refund owed (or already issued) and awaiting settlement
    Pending,
    /// Nothing to refund: zero-refund policy or no completed payment
    NoPayment,
    /// Gateway refund was attempted and failed
    RefundFailed,
}

impl CancellationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::NoPayment => "no_payment",
            Self::RefundFailed => "refund_failed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "no_payment" => Some(Self::NoPayment),
            "refund_failed" => Some(Self::RefundFailed),
            _ => None,
        }
    }
}

impl std::fmt::Display for CancellationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audit record for a cancelled booking. At most one exists per booking;
/// re-running the cancellation flow updates the existing record.
#[derive(Debug, Clone)]
pub struct CancellationRecord {
    /// Unique record ID
    pub id: String,
    /// Cancelled booking (unique)
    pub booking_id: String,
    /// Operator-entered reason, never empty
    pub reason: String,
    /// Refund amount in laari
    pub refund_amount: i64,
    /// Fare kept, in laari (total fare minus refund)
    pub cancellation_fee: i64,
    /// Current status
    pub status: CancellationStatus,
    /// Payout channel, set when a refund is owed
    pub refund_method: Option<RefundMethod>,
    /// Bank account for manual refunds
    pub bank_details: Option<BankDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CancellationRecord {
    pub fn new(
        booking_id: impl Into<String>,
        reason: impl Into<String>,
        breakdown: RefundBreakdown,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            booking_id: booking_id.into(),
            reason: reason.into(),
            refund_amount: breakdown.refund_amount,
            cancellation_fee: breakdown.cancellation_fee,
            status: if breakdown.refund_amount > 0 {
                CancellationStatus::Pending
            } else {
                CancellationStatus::NoPayment
            },
            refund_method: None,
            bank_details: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gateway refund attempt failed
    pub fn mark_refund_failed(&mut self) {
        self.status = CancellationStatus::RefundFailed;
        self.updated_at = Utc::now();
    }

    /// No completed payment exists to refund against
    pub fn mark_no_payment(&mut self) {
        self.status = CancellationStatus::NoPayment;
        self.updated_at = Utc::now();
    }

    /// Record the passenger's bank account for a manual payout
    pub fn set_bank_details(&mut self, details: BankDetails) {
        self.refund_method = Some(RefundMethod::BankTransfer);
        self.bank_details = Some(details);
        self.updated_at = Utc::now();
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_policy_refunds_whole_fare() {
        let b = RefundBreakdown::for_policy(RefundPolicy::Full, 10_000);
        assert_eq!(b.refund_amount, 10_000);
        assert_eq!(b.cancellation_fee, 0);
    }

    #[test]
    fn half_policy_splits_fare() {
        let b = RefundBreakdown::for_policy(RefundPolicy::Half, 10_000);
        assert_eq!(b.refund_amount, 5_000);
        assert_eq!(b.cancellation_fee, 5_000);
    }

    #[test]
    fn half_policy_rounds_odd_fares() {
        // 99.99 MVR -> refund 50.00, fee 49.99
        let b = RefundBreakdown::for_policy(RefundPolicy::Half, 9_999);
        assert_eq!(b.refund_amount, 5_000);
        assert_eq!(b.cancellation_fee, 4_999);
    }

    #[test]
    fn none_policy_keeps_whole_fare() {
        let b = RefundBreakdown::for_policy(RefundPolicy::None, 10_000);
        assert_eq!(b.refund_amount, 0);
        assert_eq!(b.cancellation_fee, 10_000);
    }

    #[test]
    fn fee_is_never_negative() {
        for fare in [0i64, 1, 99, 100, 9_999, 1_000_000] {
            for policy in [RefundPolicy::Full, RefundPolicy::Half, RefundPolicy::None] {
                let b = RefundBreakdown::for_policy(policy, fare);
                assert!(b.cancellation_fee >= 0);
                assert_eq!(b.refund_amount + b.cancellation_fee, fare);
            }
        }
    }

    #[test]
    fn record_with_refund_starts_pending() {
        let r = CancellationRecord::new(
            "booking-1",
            "vessel out of service",
            RefundBreakdown::for_policy(RefundPolicy::Half, 10_000),
        );
        assert_eq!(r.status, CancellationStatus::Pending);
        assert_eq!(r.refund_amount, 5_000);
    }

    #[test]
    fn record_without_refund_starts_no_payment() {
        let r = CancellationRecord::new(
            "booking-1",
            "no-show",
            RefundBreakdown::for_policy(RefundPolicy::None, 10_000),
        );
        assert_eq!(r.status, CancellationStatus::NoPayment);
        assert_eq!(r.cancellation_fee, 10_000);
    }

    #[test]
    fn bank_details_set_method() {
        let mut r = CancellationRecord::new(
            "booking-1",
            "passenger request",
            RefundBreakdown::for_policy(RefundPolicy::Full, 10_000),
        );
        r.set_bank_details(BankDetails {
            account_no: "7730000111222".into(),
            account_name: "Aishath Leena".into(),
            bank_name: "Bank of Maldives".into(),
        });
        assert_eq!(r.refund_method, Some(RefundMethod::BankTransfer));
        assert!(r.bank_details.is_some());
    }

    #[test]
    fn policy_and_method_roundtrip() {
        for policy in &[RefundPolicy::Full, RefundPolicy::Half, RefundPolicy::None] {
            assert_eq!(RefundPolicy::from_str(policy.as_str()), Some(*policy));
        }
        for method in &[RefundMethod::Gateway, RefundMethod::BankTransfer] {
            assert_eq!(RefundMethod::from_str(method.as_str()), Some(*method));
        }
        for status in &[
            CancellationStatus::Pending,
            CancellationStatus::NoPayment,
            CancellationStatus::RefundFailed,
        ] {
            assert_eq!(CancellationStatus::from_str(status.as_str()), Some(*status));
        }
        assert_eq!(RefundPolicy::from_str("quarter"), None);
    }
}
