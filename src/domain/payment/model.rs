//! Payment domain entity

use chrono::{DateTime, Utc};

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Initiated, not yet settled
    Pending,
    /// Settled successfully
    Completed,
    /// Settlement failed
    Failed,
    /// Voided before settlement
    Cancelled,
    /// Fully paid back
    Refunded,
    /// Partially paid back
    PartiallyRefunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::PartiallyRefunded => "partially_refunded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            "cancelled" => Some(Self::Cancelled),
            "refunded" => Some(Self::Refunded),
            "partially_refunded" => Some(Self::PartiallyRefunded),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Card through the payment gateway
    Card,
    /// Mobile wallet through the payment gateway
    Wallet,
    /// Direct bank transfer
    BankTransfer,
    /// Cash at the counter
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Wallet => "wallet",
            Self::BankTransfer => "bank_transfer",
            Self::Cash => "cash",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "card" => Some(Self::Card),
            "wallet" => Some(Self::Wallet),
            "bank_transfer" => Some(Self::BankTransfer),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }

    /// Whether this method settles through the electronic payment gateway
    /// (and can therefore be refunded through it).
    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Card | Self::Wallet)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment against a booking
#[derive(Debug, Clone)]
pub struct Payment {
    /// Unique payment ID
    pub id: String,
    /// Booking being paid for
    pub booking_id: String,
    /// Amount in laari
    pub amount: i64,
    /// How the payment was made
    pub method: PaymentMethod,
    /// Current status
    pub status: PaymentStatus,
    /// Gateway receipt number, present for settled gateway payments
    pub receipt_no: Option<String>,
    /// Opaque gateway transaction reference
    pub gateway_ref: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(booking_id: impl Into<String>, amount: i64, method: PaymentMethod) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            booking_id: booking_id.into(),
            amount,
            method,
            status: PaymentStatus::Pending,
            receipt_no: None,
            gateway_ref: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the payment as settled
    pub fn complete(&mut self, receipt_no: Option<String>) {
        self.status = PaymentStatus::Completed;
        self.receipt_no = receipt_no;
        self.updated_at = Utc::now();
    }

    /// Mark the payment as paid back; `full` when the refund equals the
    /// booking's total fare.
    pub fn mark_refunded(&mut self, full: bool) {
        self.status = if full {
            PaymentStatus::Refunded
        } else {
            PaymentStatus::PartiallyRefunded
        };
        self.updated_at = Utc::now();
    }

    /// A gateway refund needs a gateway-based method and a receipt number.
    pub fn can_refund_via_gateway(&self) -> bool {
        self.method.is_gateway() && self.receipt_no.is_some()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_card_payment() -> Payment {
        let mut p = Payment::new("booking-1", 10_000, PaymentMethod::Card);
        p.complete(Some("RCPT-1001".into()));
        p
    }

    #[test]
    fn complete_sets_status_and_receipt() {
        let p = completed_card_payment();
        assert_eq!(p.status, PaymentStatus::Completed);
        assert_eq!(p.receipt_no.as_deref(), Some("RCPT-1001"));
    }

    #[test]
    fn full_refund_marks_refunded() {
        let mut p = completed_card_payment();
        p.mark_refunded(true);
        assert_eq!(p.status, PaymentStatus::Refunded);
    }

    #[test]
    fn partial_refund_marks_partially_refunded() {
        let mut p = completed_card_payment();
        p.mark_refunded(false);
        assert_eq!(p.status, PaymentStatus::PartiallyRefunded);
    }

    #[test]
    fn card_with_receipt_can_refund_via_gateway() {
        assert!(completed_card_payment().can_refund_via_gateway());
    }

    #[test]
    fn card_without_receipt_cannot_refund_via_gateway() {
        let mut p = Payment::new("booking-1", 10_000, PaymentMethod::Card);
        p.complete(None);
        assert!(!p.can_refund_via_gateway());
    }

    #[test]
    fn cash_cannot_refund_via_gateway() {
        let mut p = Payment::new("booking-1", 10_000, PaymentMethod::Cash);
        p.complete(Some("RCPT-1002".into()));
        assert!(!p.can_refund_via_gateway());
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
            PaymentStatus::Cancelled,
            PaymentStatus::Refunded,
            PaymentStatus::PartiallyRefunded,
        ] {
            assert_eq!(PaymentStatus::from_str(status.as_str()), Some(*status));
        }
        assert_eq!(PaymentStatus::from_str("settled"), None);
    }

    #[test]
    fn method_roundtrip() {
        for method in &[
            PaymentMethod::Card,
            PaymentMethod::Wallet,
            PaymentMethod::BankTransfer,
            PaymentMethod::Cash,
        ] {
            assert_eq!(PaymentMethod::from_str(method.as_str()), Some(*method));
        }
        assert!(PaymentMethod::Card.is_gateway());
        assert!(PaymentMethod::Wallet.is_gateway());
        assert!(!PaymentMethod::BankTransfer.is_gateway());
    }
}
