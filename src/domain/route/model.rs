//! Route domain entity

use chrono::{DateTime, Utc};

/// An inter-island crossing with a published fare
#[derive(Debug, Clone)]
pub struct Route {
    /// Unique route ID
    pub id: String,
    /// Display name (e.g. "Malé – Hulhumalé")
    pub name: String,
    /// Origin island
    pub origin: String,
    /// Destination island
    pub destination: String,
    /// Per-passenger fare in laari
    pub fare: i64,
    /// Scheduled crossing time in minutes
    pub duration_minutes: i32,
    /// Inactive routes are hidden from new trips
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Route {
    pub fn new(
        name: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        fare: i64,
        duration_minutes: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            origin: origin.into(),
            destination: destination.into(),
            fare,
            duration_minutes,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Total fare for a party of `passengers`
    pub fn fare_for(&self, passengers: i32) -> i64 {
        self.fare * i64::from(passengers.max(0))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_scales_with_passengers() {
        let r = Route::new("Malé – Hulhumalé", "Malé", "Hulhumalé", 2_500, 25);
        assert_eq!(r.fare_for(1), 2_500);
        assert_eq!(r.fare_for(4), 10_000);
    }

    #[test]
    fn fare_for_negative_party_is_zero() {
        let r = Route::new("Malé – Hulhumalé", "Malé", "Hulhumalé", 2_500, 25);
        assert_eq!(r.fare_for(-3), 0);
    }

    #[test]
    fn new_route_is_active() {
        let r = Route::new("Malé – Villingili", "Malé", "Villingili", 400, 10);
        assert!(r.is_active);
    }
}
