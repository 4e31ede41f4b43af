//! Route DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Route;
use crate::shared::money;

/// An inter-island crossing with a published fare
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    /// Route ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Origin island
    pub origin: String,
    /// Destination island
    pub destination: String,
    /// Per-passenger fare in laari
    pub fare: i64,
    /// Fare formatted (e.g. "25.00 MVR")
    pub fare_formatted: String,
    /// Crossing time in minutes
    pub duration_minutes: i32,
    /// Whether the route is open for new trips
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Route> for RouteDto {
    fn from(r: Route) -> Self {
        Self {
            id: r.id,
            name: r.name,
            origin: r.origin,
            destination: r.destination,
            fare: r.fare,
            fare_formatted: money::format_mvr(r.fare),
            duration_minutes: r.duration_minutes,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Request to create a route
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRouteRequest {
    /// Display name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Origin island
    #[validate(length(min = 1, max = 100))]
    pub origin: String,
    /// Destination island
    #[validate(length(min = 1, max = 100))]
    pub destination: String,
    /// Per-passenger fare in laari
    #[validate(range(min = 0))]
    pub fare: i64,
    /// Crossing time in minutes
    #[validate(range(min = 1))]
    pub duration_minutes: i32,
}

/// Partial update of a route
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRouteRequest {
    /// New display name
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New origin island
    pub origin: Option<String>,
    /// New destination island
    pub destination: Option<String>,
    /// New per-passenger fare in laari
    #[validate(range(min = 0))]
    pub fare: Option<i64>,
    /// New crossing time
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,
    /// Open/close for new trips
    pub is_active: Option<bool>,
}
