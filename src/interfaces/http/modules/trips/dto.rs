//! Trip DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{SeatReservation, Trip};

/// A scheduled sailing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TripDto {
    /// Trip ID
    pub id: String,
    /// Route being sailed
    pub route_id: String,
    /// Vessel assigned
    pub vessel_id: String,
    /// Scheduled departure
    pub departure_at: DateTime<Utc>,
    /// Status: `scheduled`, `departed`, `arrived`, `cancelled`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Trip> for TripDto {
    fn from(t: Trip) -> Self {
        Self {
            id: t.id,
            route_id: t.route_id,
            vessel_id: t.vessel_id,
            departure_at: t.departure_at,
            status: t.status.as_str().to_string(),
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Request to schedule a trip
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTripRequest {
    /// Route to sail
    #[validate(length(min = 1))]
    pub route_id: String,
    /// Vessel to assign
    #[validate(length(min = 1))]
    pub vessel_id: String,
    /// Departure time (ISO 8601)
    #[validate(length(min = 1))]
    pub departure_at: String,
}

/// A seat on a trip
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatReservationDto {
    /// Row ID
    pub id: String,
    /// Trip the seat belongs to
    pub trip_id: String,
    /// Seat label (e.g. "A12")
    pub seat_number: String,
    /// Booking holding the seat, if sold
    pub booking_id: Option<String>,
    /// Free for sale
    pub is_available: bool,
}

impl From<SeatReservation> for SeatReservationDto {
    fn from(s: SeatReservation) -> Self {
        Self {
            id: s.id,
            trip_id: s.trip_id,
            seat_number: s.seat_number,
            booking_id: s.booking_id,
            is_available: s.is_available,
        }
    }
}
