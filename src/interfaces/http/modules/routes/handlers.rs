//! Route HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::domain::{DomainError, RepositoryProvider, Route};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for route handlers.
#[derive(Clone)]
pub struct RouteAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/routes",
    tag = "Routes",
    responses(
        (status = 200, description = "All routes ordered by name", body = ApiResponse<Vec<RouteDto>>)
    )
)]
pub async fn list_routes(
    State(state): State<RouteAppState>,
) -> Result<Json<ApiResponse<Vec<RouteDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.routes().find_all().await {
        Ok(routes) => {
            let dtos: Vec<RouteDto> = routes.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list routes: {}", e))),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/routes/{id}",
    tag = "Routes",
    params(("id" = String, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Route details", body = ApiResponse<RouteDto>),
        (status = 404, description = "Route not found")
    )
)]
pub async fn get_route(
    State(state): State<RouteAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RouteDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.routes().find_by_id(&id).await {
        Ok(Some(route)) => Ok(Json(ApiResponse::success(route.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Route {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get route: {}", e))),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/routes",
    tag = "Routes",
    request_body = CreateRouteRequest,
    responses(
        (status = 201, description = "Route created", body = ApiResponse<RouteDto>),
        (status = 422, description = "Invalid fields")
    )
)]
pub async fn create_route(
    State(state): State<RouteAppState>,
    ValidatedJson(req): ValidatedJson<CreateRouteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RouteDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let route = Route::new(
        req.name,
        req.origin,
        req.destination,
        req.fare,
        req.duration_minutes,
    );

    match state.repos.routes().save(route.clone()).await {
        Ok(()) => Ok((StatusCode::CREATED, Json(ApiResponse::success(route.into())))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to create route: {}", e))),
        )),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/routes/{id}",
    tag = "Routes",
    params(("id" = String, Path, description = "Route ID")),
    request_body = UpdateRouteRequest,
    responses(
        (status = 200, description = "Route updated", body = ApiResponse<RouteDto>),
        (status = 404, description = "Route not found")
    )
)]
pub async fn update_route(
    State(state): State<RouteAppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateRouteRequest>,
) -> Result<Json<ApiResponse<RouteDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = match state.repos.routes().find_by_id(&id).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Route {} not found", id))),
            ));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to get route: {}", e))),
            ));
        }
    };

    let updated = Route {
        id: existing.id,
        name: req.name.unwrap_or(existing.name),
        origin: req.origin.unwrap_or(existing.origin),
        destination: req.destination.unwrap_or(existing.destination),
        fare: req.fare.unwrap_or(existing.fare),
        duration_minutes: req.duration_minutes.unwrap_or(existing.duration_minutes),
        is_active: req.is_active.unwrap_or(existing.is_active),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    match state.repos.routes().update(updated.clone()).await {
        Ok(()) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to update route: {}", e))),
        )),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/routes/{id}",
    tag = "Routes",
    params(("id" = String, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Route deleted"),
        (status = 404, description = "Route not found")
    )
)]
pub async fn delete_route(
    State(state): State<RouteAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.routes().delete(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success("Route deleted".to_string()))),
        Err(DomainError::NotFound { .. }) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Route {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to delete route: {}", e))),
        )),
    }
}
