//! Vessel domain entity

use chrono::{DateTime, Utc};

/// A ferry in the fleet
#[derive(Debug, Clone)]
pub struct Vessel {
    /// Unique vessel ID
    pub id: String,
    /// Display name (e.g. "Dhoni Express 2")
    pub name: String,
    /// Transport authority registration number
    pub registration_no: Option<String>,
    /// Total passenger seats
    pub capacity: i32,
    /// Inactive vessels cannot be scheduled on new trips
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vessel {
    pub fn new(name: impl Into<String>, capacity: i32) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            registration_no: None,
            capacity,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vessel_is_active() {
        let v = Vessel::new("Dhoni Express", 48);
        assert!(v.is_active);
        assert_eq!(v.capacity, 48);
        assert!(v.registration_no.is_none());
    }

    #[test]
    fn deactivate_clears_active_flag() {
        let mut v = Vessel::new("Dhoni Express", 48);
        v.deactivate();
        assert!(!v.is_active);
    }
}
