//! Booking HTTP handlers
//!
//! Carries the cancellation endpoint: the one operation here that mutates
//! more than a single row.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::application::{BookingService, CancelBooking, CancellationService};
use crate::domain::{
    BankDetails, BookingStatus, DomainError, RefundBreakdown, RefundMethod, RefundPolicy,
    RepositoryProvider,
};
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, ValidatedJson};
use crate::shared::money;

use super::super::cancellations::CancellationDto;
use super::super::payments::PaymentDto;
use super::super::trips::SeatReservationDto;
use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub bookings: Arc<BookingService>,
    pub cancellation: Arc<CancellationService>,
}

fn domain_error_response(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Gateway(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    params(BookingListParams),
    responses(
        (status = 200, description = "Bookings, newest first", body = ApiResponse<PaginatedResponse<BookingDto>>),
        (status = 400, description = "Unknown status filter")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
    Query(params): Query<BookingListParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<BookingDto>>>, (StatusCode, Json<ApiResponse<()>>)>
{
    let status = match params.status.as_deref() {
        None => None,
        Some(s) => Some(BookingStatus::from_str(s).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!("Unknown booking status: {}", s))),
            )
        })?),
    };

    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(50).clamp(1, 100);

    let (bookings, total) = state
        .bookings
        .list(page, limit, status)
        .await
        .map_err(domain_error_response)?;

    let items: Vec<BookingDto> = bookings.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        items, total, page, limit,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/stats",
    tag = "Bookings",
    responses(
        (status = 200, description = "Dashboard counters", body = ApiResponse<BookingStatsDto>)
    )
)]
pub async fn booking_stats(
    State(state): State<BookingAppState>,
) -> Result<Json<ApiResponse<BookingStatsDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let stats = state.bookings.stats().await.map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(stats.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDto>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let booking = state.bookings.get(&id).await.map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}/status",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Booking updated", body = ApiResponse<BookingDto>),
        (status = 400, description = "Invalid status or transition"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking_status(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let status = BookingStatus::from_str(&req.status).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Unknown booking status: {}",
                req.status
            ))),
        )
    })?;

    let booking = state
        .bookings
        .set_status(&id, status)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

/// Refund preview query
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct RefundPreviewParams {
    /// Refund policy to preview: `full`, `half`, `none`
    pub policy: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}/refund-preview",
    tag = "Bookings",
    params(
        ("id" = String, Path, description = "Booking ID"),
        RefundPreviewParams
    ),
    responses(
        (status = 200, description = "Refund and fee for the chosen policy", body = ApiResponse<RefundPreviewResponse>),
        (status = 400, description = "Unknown policy"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn refund_preview(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
    Query(params): Query<RefundPreviewParams>,
) -> Result<Json<ApiResponse<RefundPreviewResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let policy = RefundPolicy::from_str(&params.policy).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Unknown refund policy: {}",
                params.policy
            ))),
        )
    })?;

    let booking = state.bookings.get(&id).await.map_err(domain_error_response)?;

    // same constructor the cancellation flow uses, so the preview can
    // never drift from what actually gets refunded
    let breakdown = RefundBreakdown::for_policy(policy, booking.total_fare);

    Ok(Json(ApiResponse::success(RefundPreviewResponse {
        policy: policy.as_str().to_string(),
        refund_amount: breakdown.refund_amount,
        refund_formatted: money::format_mvr(breakdown.refund_amount),
        cancellation_fee: breakdown.cancellation_fee,
        fee_formatted: money::format_mvr(breakdown.cancellation_fee),
    })))
}

fn parse_bank_details(
    req: &CancelBookingRequest,
) -> Result<Option<BankDetails>, (StatusCode, Json<ApiResponse<()>>)> {
    match (
        req.bank_account_no.as_deref(),
        req.bank_account_name.as_deref(),
        req.bank_name.as_deref(),
    ) {
        (None, None, None) => Ok(None),
        (Some(account_no), Some(account_name), Some(bank_name)) => Ok(Some(BankDetails {
            account_no: account_no.to_string(),
            account_name: account_name.to_string(),
            bank_name: bank_name.to_string(),
        })),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "Bank details need account number, account name and bank name together",
            )),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/cancel",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = CancelBookingRequest,
    responses(
        (status = 200, description = "Cancellation result", body = ApiResponse<CancelBookingResponse>),
        (status = 400, description = "Invalid policy, method or booking state"),
        (status = 404, description = "Booking not found"),
        (status = 422, description = "Empty reason")
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<CancelBookingRequest>,
) -> Result<Json<ApiResponse<CancelBookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let policy = RefundPolicy::from_str(&req.refund_policy).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Unknown refund policy: {}",
                req.refund_policy
            ))),
        )
    })?;

    let method = match req.refund_method.as_deref() {
        None => RefundMethod::Gateway,
        Some(s) => RefundMethod::from_str(s).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!("Unknown refund method: {}", s))),
            )
        })?,
    };

    let bank_details = parse_bank_details(&req)?;

    let outcome = state
        .cancellation
        .cancel_booking(
            &id,
            CancelBooking {
                reason: req.reason,
                policy,
                method,
                bank_details,
            },
        )
        .await
        .map_err(domain_error_response)?;

    let message = if outcome.refund_amount == 0 {
        "Booking cancelled. No refund due.".to_string()
    } else if outcome.record.status == crate::domain::CancellationStatus::RefundFailed {
        format!(
            "Booking cancelled, but the gateway refund of {} failed; see the cancellation record.",
            money::format_mvr(outcome.refund_amount)
        )
    } else {
        format!(
            "Booking cancelled. Refund of {} recorded.",
            money::format_mvr(outcome.refund_amount)
        )
    };

    Ok(Json(ApiResponse::success(CancelBookingResponse {
        booking: outcome.booking.into(),
        cancellation: outcome.record.into(),
        refund_amount: outcome.refund_amount,
        refund_formatted: money::format_mvr(outcome.refund_amount),
        cancellation_fee: outcome.cancellation_fee,
        payment_updated: outcome.payment_updated,
        warnings: outcome.warnings,
        message,
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}/payments",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Payments for the booking, newest first", body = ApiResponse<Vec<PaymentDto>>)
    )
)]
pub async fn list_booking_payments(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<PaymentDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let payments = state
        .repos
        .payments()
        .find_for_booking(&id)
        .await
        .map_err(domain_error_response)?;
    let dtos: Vec<PaymentDto> = payments.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}/cancellation",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Cancellation record for the booking", body = ApiResponse<CancellationDto>),
        (status = 404, description = "Booking was never cancelled")
    )
)]
pub async fn get_booking_cancellation(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CancellationDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.cancellations().find_by_booking(&id).await {
        Ok(Some(record)) => Ok(Json(ApiResponse::success(record.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "No cancellation record for booking {}",
                id
            ))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}/seats",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Seats held by the booking", body = ApiResponse<Vec<SeatReservationDto>>)
    )
)]
pub async fn list_booking_seats(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<SeatReservationDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let seats = state
        .repos
        .seat_reservations()
        .find_for_booking(&id)
        .await
        .map_err(domain_error_response)?;
    let dtos: Vec<SeatReservationDto> = seats.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
