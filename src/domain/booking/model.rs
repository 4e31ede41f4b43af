//! Booking domain entity

use chrono::{DateTime, Utc};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Created but not yet paid
    PendingPayment,
    /// Paid and holding its seats
    Confirmed,
    /// Passengers checked in at the jetty
    CheckedIn,
    /// Trip completed
    Completed,
    /// Cancelled by an operator or the passenger
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPayment => "pending_payment",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending_payment" => Some(Self::PendingPayment),
            "confirmed" => Some(Self::Confirmed),
            "checked_in" => Some(Self::CheckedIn),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reservation for one or more passengers on a scheduled trip
#[derive(Debug, Clone)]
pub struct Booking {
    /// Unique booking ID
    pub id: String,
    /// Short human-readable reference shown on tickets (e.g. "BKG-3F9A21")
    pub reference: String,
    /// Trip being travelled
    pub trip_id: String,
    /// Agent that sold the booking, if any
    pub agent_id: Option<String>,
    /// Lead passenger / contact name
    pub contact_name: String,
    /// Number of passengers
    pub passenger_count: i32,
    /// Total fare in laari
    pub total_fare: i64,
    /// Current status
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set once when the booking is cancelled
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn new(
        trip_id: impl Into<String>,
        contact_name: impl Into<String>,
        passenger_count: i32,
        total_fare: i64,
    ) -> Self {
        let id = uuid::Uuid::new_v4();
        let now = Utc::now();
        Self {
            id: id.to_string(),
            reference: format!("BKG-{}", &id.simple().to_string()[..6].to_uppercase()),
            trip_id: trip_id.into(),
            agent_id: None,
            contact_name: contact_name.into(),
            passenger_count,
            total_fare,
            status: BookingStatus::PendingPayment,
            created_at: now,
            updated_at: now,
            cancelled_at: None,
        }
    }

    pub fn confirm(&mut self) {
        self.status = BookingStatus::Confirmed;
        self.updated_at = Utc::now();
    }

    /// Cancel this booking
    pub fn cancel(&mut self) {
        let now = Utc::now();
        self.status = BookingStatus::Cancelled;
        if self.cancelled_at.is_none() {
            self.cancelled_at = Some(now);
        }
        self.updated_at = now;
    }

    /// Completed trips are the only ones the cancellation flow refuses.
    /// Re-running the flow on an already-cancelled booking is allowed as a
    /// manual retry after a partial failure.
    pub fn is_cancellable(&self) -> bool {
        self.status != BookingStatus::Completed
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking::new("trip-1", "Aishath Leena", 2, 10_000)
    }

    #[test]
    fn new_booking_awaits_payment() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::PendingPayment);
        assert!(b.cancelled_at.is_none());
        assert!(b.reference.starts_with("BKG-"));
        assert_eq!(b.reference.len(), "BKG-".len() + 6);
    }

    #[test]
    fn cancel_sets_status_and_timestamp() {
        let mut b = sample_booking();
        b.confirm();
        b.cancel();
        assert_eq!(b.status, BookingStatus::Cancelled);
        assert!(b.cancelled_at.is_some());
    }

    #[test]
    fn cancel_twice_keeps_first_timestamp() {
        let mut b = sample_booking();
        b.cancel();
        let first = b.cancelled_at;
        b.cancel();
        assert_eq!(b.cancelled_at, first);
    }

    #[test]
    fn completed_booking_is_not_cancellable() {
        let mut b = sample_booking();
        b.status = BookingStatus::Completed;
        assert!(!b.is_cancellable());
    }

    #[test]
    fn cancelled_booking_is_still_cancellable() {
        // re-running the flow is the manual retry path
        let mut b = sample_booking();
        b.cancel();
        assert!(b.is_cancellable());
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            BookingStatus::PendingPayment,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), Some(*status));
        }
        assert_eq!(BookingStatus::from_str("refunded"), None);
    }
}
