//! Trip HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;

use crate::domain::{RepositoryProvider, Trip};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for trip handlers.
#[derive(Clone)]
pub struct TripAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/trips",
    tag = "Trips",
    responses(
        (status = 200, description = "All trips, latest departure first", body = ApiResponse<Vec<TripDto>>)
    )
)]
pub async fn list_trips(
    State(state): State<TripAppState>,
) -> Result<Json<ApiResponse<Vec<TripDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.trips().find_all().await {
        Ok(trips) => {
            let dtos: Vec<TripDto> = trips.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list trips: {}", e))),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/trips",
    tag = "Trips",
    request_body = CreateTripRequest,
    responses(
        (status = 201, description = "Trip scheduled", body = ApiResponse<TripDto>),
        (status = 400, description = "Unknown route/vessel or bad departure time")
    )
)]
pub async fn create_trip(
    State(state): State<TripAppState>,
    ValidatedJson(req): ValidatedJson<CreateTripRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TripDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let departure_at = DateTime::parse_from_rfc3339(&req.departure_at)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!("Invalid departure_at: {}", e))),
            )
        })?;

    // both references must exist before the trip is scheduled
    let route = state.repos.routes().find_by_id(&req.route_id).await;
    match route {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!(
                    "Route {} not found",
                    req.route_id
                ))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to load route: {}", e))),
            ));
        }
    }

    let vessel = state.repos.vessels().find_by_id(&req.vessel_id).await;
    let capacity = match vessel {
        Ok(Some(v)) => v.capacity,
        Ok(None) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!(
                    "Vessel {} not found",
                    req.vessel_id
                ))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to load vessel: {}", e))),
            ));
        }
    };

    let trip = Trip::new(&req.route_id, &req.vessel_id, departure_at);
    if let Err(e) = state.repos.trips().save(trip.clone()).await {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to save trip: {}", e))),
        ));
    }

    // seed one seat row per vessel seat; failures only cost the seat map
    for n in 1..=capacity {
        let seat = crate::domain::SeatReservation::new(&trip.id, format!("S{}", n));
        if let Err(e) = state.repos.seat_reservations().save(seat).await {
            tracing::error!(trip_id = %trip.id, seat = n, error = %e, "Failed to seed seat");
        }
    }

    Ok((StatusCode::CREATED, Json(ApiResponse::success(trip.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/trips/{id}",
    tag = "Trips",
    params(("id" = String, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Trip details", body = ApiResponse<TripDto>),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn get_trip(
    State(state): State<TripAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TripDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.trips().find_by_id(&id).await {
        Ok(Some(trip)) => Ok(Json(ApiResponse::success(trip.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Trip {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get trip: {}", e))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/trips/{id}/seats",
    tag = "Trips",
    params(("id" = String, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Seat map of the trip", body = ApiResponse<Vec<SeatReservationDto>>)
    )
)]
pub async fn list_trip_seats(
    State(state): State<TripAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<SeatReservationDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.seat_reservations().find_for_trip(&id).await {
        Ok(seats) => {
            let dtos: Vec<SeatReservationDto> = seats.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list seats: {}", e))),
        )),
    }
}
