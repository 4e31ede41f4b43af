//! Payment HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;

use super::dto::PaymentDto;

/// Application state for payment handlers.
#[derive(Clone)]
pub struct PaymentAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/payments/{id}",
    tag = "Payments",
    params(("id" = String, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment details", body = ApiResponse<PaymentDto>),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn get_payment(
    State(state): State<PaymentAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PaymentDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.payments().find_by_id(&id).await {
        Ok(Some(payment)) => Ok(Json(ApiResponse::success(payment.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Payment {} not found", id))),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to get payment: {}", e))),
        )),
    }
}
