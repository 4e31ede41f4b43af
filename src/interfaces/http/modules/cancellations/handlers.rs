//! Cancellation HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};

use super::dto::CancellationDto;

/// Application state for cancellation handlers.
#[derive(Clone)]
pub struct CancellationAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/cancellations",
    tag = "Cancellations",
    params(PaginationParams),
    responses(
        (status = 200, description = "Cancellation ledger, newest first", body = ApiResponse<PaginatedResponse<CancellationDto>>)
    )
)]
pub async fn list_cancellations(
    State(state): State<CancellationAppState>,
    Query(params): Query<PaginationParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<CancellationDto>>>,
    (StatusCode, Json<ApiResponse<()>>),
> {
    let (page, limit) = params.clamped();
    let (records, total) = state
        .repos
        .cancellations()
        .find_page(page, limit)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!(
                    "Failed to list cancellations: {}",
                    e
                ))),
            )
        })?;

    let items: Vec<CancellationDto> = records.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        items, total, page, limit,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/cancellations/{id}",
    tag = "Cancellations",
    params(("id" = String, Path, description = "Cancellation record ID")),
    responses(
        (status = 200, description = "Cancellation record", body = ApiResponse<CancellationDto>),
        (status = 404, description = "Record not found")
    )
)]
pub async fn get_cancellation(
    State(state): State<CancellationAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CancellationDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.cancellations().find_by_id(&id).await {
        Ok(Some(record)) => Ok(Json(ApiResponse::success(record.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Cancellation {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to get cancellation: {}",
                e
            ))),
        )),
    }
}
