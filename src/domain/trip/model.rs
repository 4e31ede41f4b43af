//! Trip domain entity

use chrono::{DateTime, Utc};

/// Trip status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    /// Scheduled, boarding not yet closed
    Scheduled,
    /// Vessel has left the origin jetty
    Departed,
    /// Vessel has arrived at the destination
    Arrived,
    /// Trip was called off
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Departed => "departed",
            Self::Arrived => "arrived",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(Self::Scheduled),
            "departed" => Some(Self::Departed),
            "arrived" => Some(Self::Arrived),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled sailing of a vessel on a route
#[derive(Debug, Clone)]
pub struct Trip {
    /// Unique trip ID
    pub id: String,
    /// Route being sailed
    pub route_id: String,
    /// Vessel assigned to the sailing
    pub vessel_id: String,
    /// Scheduled departure time
    pub departure_at: DateTime<Utc>,
    /// Current status
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn new(
        route_id: impl Into<String>,
        vessel_id: impl Into<String>,
        departure_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            route_id: route_id.into(),
            vessel_id: vessel_id.into(),
            departure_at,
            status: TripStatus::Scheduled,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the trip is still ahead of its departure time
    pub fn is_upcoming(&self) -> bool {
        self.status == TripStatus::Scheduled && self.departure_at > Utc::now()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_trip_is_scheduled() {
        let t = Trip::new("route-1", "vessel-1", Utc::now() + Duration::hours(2));
        assert_eq!(t.status, TripStatus::Scheduled);
        assert!(t.is_upcoming());
    }

    #[test]
    fn past_departure_is_not_upcoming() {
        let t = Trip::new("route-1", "vessel-1", Utc::now() - Duration::hours(1));
        assert!(!t.is_upcoming());
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            TripStatus::Scheduled,
            TripStatus::Departed,
            TripStatus::Arrived,
            TripStatus::Cancelled,
        ] {
            assert_eq!(TripStatus::from_str(status.as_str()), Some(*status));
        }
        assert_eq!(TripStatus::from_str("unknown"), None);
    }
}
