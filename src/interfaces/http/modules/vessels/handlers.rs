//! Vessel HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::domain::{DomainError, RepositoryProvider, Vessel};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for vessel handlers.
#[derive(Clone)]
pub struct VesselAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/vessels",
    tag = "Vessels",
    responses(
        (status = 200, description = "All vessels, active first", body = ApiResponse<Vec<VesselDto>>)
    )
)]
pub async fn list_vessels(
    State(state): State<VesselAppState>,
) -> Result<Json<ApiResponse<Vec<VesselDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vessels().find_all().await {
        Ok(vessels) => {
            let dtos: Vec<VesselDto> = vessels.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list vessels: {}", e))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vessels/{id}",
    tag = "Vessels",
    params(("id" = String, Path, description = "Vessel ID")),
    responses(
        (status = 200, description = "Vessel details", body = ApiResponse<VesselDto>),
        (status = 404, description = "Vessel not found")
    )
)]
pub async fn get_vessel(
    State(state): State<VesselAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<VesselDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vessels().find_by_id(&id).await {
        Ok(Some(vessel)) => Ok(Json(ApiResponse::success(vessel.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Vessel {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get vessel: {}", e))),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/vessels",
    tag = "Vessels",
    request_body = CreateVesselRequest,
    responses(
        (status = 201, description = "Vessel registered", body = ApiResponse<VesselDto>),
        (status = 422, description = "Invalid name or capacity")
    )
)]
pub async fn create_vessel(
    State(state): State<VesselAppState>,
    ValidatedJson(req): ValidatedJson<CreateVesselRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VesselDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let mut vessel = Vessel::new(req.name, req.capacity);
    vessel.registration_no = req.registration_no;

    match state.repos.vessels().save(vessel.clone()).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(vessel.into())),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to create vessel: {}", e))),
        )),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/vessels/{id}",
    tag = "Vessels",
    params(("id" = String, Path, description = "Vessel ID")),
    request_body = UpdateVesselRequest,
    responses(
        (status = 200, description = "Vessel updated", body = ApiResponse<VesselDto>),
        (status = 404, description = "Vessel not found")
    )
)]
pub async fn update_vessel(
    State(state): State<VesselAppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateVesselRequest>,
) -> Result<Json<ApiResponse<VesselDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = match state.repos.vessels().find_by_id(&id).await {
        Ok(Some(v)) => v,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Vessel {} not found", id))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get vessel: {}", e))),
            ));
        }
    };

    let updated = Vessel {
        id: existing.id,
        name: req.name.unwrap_or(existing.name),
        registration_no: req.registration_no.or(existing.registration_no),
        capacity: req.capacity.unwrap_or(existing.capacity),
        is_active: req.is_active.unwrap_or(existing.is_active),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    match state.repos.vessels().update(updated.clone()).await {
        Ok(()) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to update vessel: {}", e))),
        )),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/vessels/{id}",
    tag = "Vessels",
    params(("id" = String, Path, description = "Vessel ID")),
    responses(
        (status = 200, description = "Vessel deleted"),
        (status = 404, description = "Vessel not found")
    )
)]
pub async fn delete_vessel(
    State(state): State<VesselAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vessels().delete(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success("Vessel deleted".to_string()))),
        Err(DomainError::NotFound { .. }) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Vessel {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to delete vessel: {}", e))),
        )),
    }
}
