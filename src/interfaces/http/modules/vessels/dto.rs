//! Vessel DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Vessel;

/// A ferry in the fleet
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VesselDto {
    /// Vessel ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Registration number
    pub registration_no: Option<String>,
    /// Passenger seats
    pub capacity: i32,
    /// Whether the vessel can be scheduled
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vessel> for VesselDto {
    fn from(v: Vessel) -> Self {
        Self {
            id: v.id,
            name: v.name,
            registration_no: v.registration_no,
            capacity: v.capacity,
            is_active: v.is_active,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

/// Request to register a vessel
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVesselRequest {
    /// Display name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Registration number
    pub registration_no: Option<String>,
    /// Passenger seats (1–500)
    #[validate(range(min = 1, max = 500))]
    pub capacity: i32,
}

/// Partial update of a vessel
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVesselRequest {
    /// New display name
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New registration number
    pub registration_no: Option<String>,
    /// New seat count
    #[validate(range(min = 1, max = 500))]
    pub capacity: Option<i32>,
    /// Activate/deactivate
    pub is_active: Option<bool>,
}
