//! Seat reservation domain entity

use chrono::{DateTime, Utc};

/// A physical seat on a trip, optionally held by a booking
#[derive(Debug, Clone)]
pub struct SeatReservation {
    /// Unique row ID
    pub id: String,
    /// Trip the seat belongs to
    pub trip_id: String,
    /// Seat label (e.g. "A12")
    pub seat_number: String,
    /// Booking currently holding the seat
    pub booking_id: Option<String>,
    /// Free for sale
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SeatReservation {
    pub fn new(trip_id: impl Into<String>, seat_number: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            trip_id: trip_id.into(),
            seat_number: seat_number.into(),
            booking_id: None,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Hold the seat for a booking
    pub fn assign(&mut self, booking_id: impl Into<String>) {
        self.booking_id = Some(booking_id.into());
        self.is_available = false;
        self.updated_at = Utc::now();
    }

    /// Put the seat back on sale and detach it from its booking
    pub fn release(&mut self) {
        self.booking_id = None;
        self.is_available = true;
        self.updated_at = Utc::now();
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_seat_is_available() {
        let s = SeatReservation::new("trip-1", "A12");
        assert!(s.is_available);
        assert!(s.booking_id.is_none());
    }

    #[test]
    fn assign_holds_seat() {
        let mut s = SeatReservation::new("trip-1", "A12");
        s.assign("booking-1");
        assert!(!s.is_available);
        assert_eq!(s.booking_id.as_deref(), Some("booking-1"));
    }

    #[test]
    fn release_clears_booking_and_frees_seat() {
        let mut s = SeatReservation::new("trip-1", "A12");
        s.assign("booking-1");
        s.release();
        assert!(s.is_available);
        assert!(s.booking_id.is_none());
    }
}
