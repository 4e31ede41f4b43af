//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, CancellationService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::interfaces::http::modules::{
    bookings, cancellations, health, metrics, payments, routes, trips, vessels,
};

/// Unified state for every /api/v1 route. Axum hands each handler its own
/// state via `FromRef`.
#[derive(Clone)]
pub struct AdminUnifiedState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub bookings: Arc<BookingService>,
    pub cancellation: Arc<CancellationService>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AdminUnifiedState> for bookings::BookingAppState {
    fn from_ref(s: &AdminUnifiedState) -> Self {
        bookings::BookingAppState {
            repos: Arc::clone(&s.repos),
            bookings: Arc::clone(&s.bookings),
            cancellation: Arc::clone(&s.cancellation),
        }
    }
}

impl FromRef<AdminUnifiedState> for cancellations::CancellationAppState {
    fn from_ref(s: &AdminUnifiedState) -> Self {
        cancellations::CancellationAppState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AdminUnifiedState> for payments::PaymentAppState {
    fn from_ref(s: &AdminUnifiedState) -> Self {
        payments::PaymentAppState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AdminUnifiedState> for trips::TripAppState {
    fn from_ref(s: &AdminUnifiedState) -> Self {
        trips::TripAppState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AdminUnifiedState> for vessels::VesselAppState {
    fn from_ref(s: &AdminUnifiedState) -> Self {
        vessels::VesselAppState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AdminUnifiedState> for routes::RouteAppState {
    fn from_ref(s: &AdminUnifiedState) -> Self {
        routes::RouteAppState {
            repos: Arc::clone(&s.repos),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Monitoring
        metrics::handlers::render_metrics,
        // Bookings
        bookings::handlers::list_bookings,
        bookings::handlers::booking_stats,
        bookings::handlers::get_booking,
        bookings::handlers::update_booking_status,
        bookings::handlers::refund_preview,
        bookings::handlers::cancel_booking,
        bookings::handlers::list_booking_payments,
        bookings::handlers::get_booking_cancellation,
        bookings::handlers::list_booking_seats,
        // Payments
        payments::handlers::get_payment,
        // Cancellations
        cancellations::handlers::list_cancellations,
        cancellations::handlers::get_cancellation,
        // Trips
        trips::handlers::list_trips,
        trips::handlers::create_trip,
        trips::handlers::get_trip,
        trips::handlers::list_trip_seats,
        // Vessels
        vessels::handlers::list_vessels,
        vessels::handlers::get_vessel,
        vessels::handlers::create_vessel,
        vessels::handlers::update_vessel,
        vessels::handlers::delete_vessel,
        // Routes
        routes::handlers::list_routes,
        routes::handlers::get_route,
        routes::handlers::create_route,
        routes::handlers::update_route,
        routes::handlers::delete_route,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginationParams,
            PaginatedResponse<bookings::dto::BookingDto>,
            PaginatedResponse<cancellations::dto::CancellationDto>,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
            // Bookings
            bookings::dto::BookingDto,
            bookings::dto::BookingStatsDto,
            bookings::dto::UpdateBookingStatusRequest,
            bookings::dto::CancelBookingRequest,
            bookings::dto::CancelBookingResponse,
            bookings::dto::RefundPreviewResponse,
            // Payments
            payments::dto::PaymentDto,
            // Cancellations
            cancellations::dto::CancellationDto,
            // Trips
            trips::dto::TripDto,
            trips::dto::CreateTripRequest,
            trips::dto::SeatReservationDto,
            // Vessels
            vessels::dto::VesselDto,
            vessels::dto::CreateVesselRequest,
            vessels::dto::UpdateVesselRequest,
            // Routes
            routes::dto::RouteDto,
            routes::dto::CreateRouteRequest,
            routes::dto::UpdateRouteRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service and database liveness. Use for uptime and readiness checks."),
        (name = "Monitoring", description = "Prometheus metrics: cancellations processed, gateway refunds attempted/failed, HTTP traces."),
        (name = "Bookings", description = "Passenger bookings: listing, dashboard stats, status edits, refund preview and the cancellation flow. Statuses: `pending_payment`, `confirmed`, `checked_in`, `completed`, `cancelled`. All amounts are in laari (1 MVR = 100 laari)."),
        (name = "Payments", description = "Payments against bookings. Statuses: `pending`, `completed`, `failed`, `cancelled`, `refunded`, `partially_refunded`. Card and wallet payments settle through the payment gateway and can be refunded through it."),
        (name = "Cancellations", description = "Cancellation ledger. One record per cancelled booking with refund amount, fee and payout channel. Statuses: `pending`, `no_payment`, `refund_failed`."),
        (name = "Trips", description = "Scheduled sailings of a vessel on a route, with their seat maps. Creating a trip seeds one seat row per vessel seat."),
        (name = "Vessels", description = "Fleet management. Inactive vessels cannot be scheduled on new trips."),
        (name = "Routes", description = "Inter-island crossings with published per-passenger fares in laari."),
    ),
    info(
        title = "Raajje Ferry Admin API",
        version = "1.0.0",
        description = "REST API behind the admin console of the inter-island ferry booking platform.

## Response format

Every endpoint answers inside a standard envelope:
```json
{\"success\": true, \"data\": {...}}
```
On failure:
```json
{\"success\": false, \"error\": \"description\"}
```

## Money

All amounts are integers in laari, the minor unit of MVR (1 MVR = 100 laari).
Formatted strings (e.g. `\"50.00 MVR\"`) are included alongside for display.

## Cancellation flow

`POST /api/v1/bookings/{id}/cancel` runs the cancellation sequence: booking
marked cancelled, seats released, cancellation record written, refund issued
through the gateway or recorded for bank transfer, payment status updated.
An empty reason is rejected before any state changes. Use
`GET /api/v1/bookings/{id}/refund-preview` to show the operator the exact
amounts beforehand.",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    booking_service: Arc<BookingService>,
    cancellation_service: Arc<CancellationService>,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let unified = AdminUnifiedState {
        repos,
        bookings: booking_service,
        cancellation: cancellation_service,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // A SINGLE router for every /api/v1 route. Because there is only ONE
    // router, Axum's `matchit` sees every parametric segment in one tree
    // and routes correctly.
    let api_routes = Router::new()
        // --- Bookings ---
        .route("/bookings", get(bookings::handlers::list_bookings))
        .route("/bookings/stats", get(bookings::handlers::booking_stats))
        .route("/bookings/{id}", get(bookings::handlers::get_booking))
        .route(
            "/bookings/{id}/status",
            put(bookings::handlers::update_booking_status),
        )
        .route(
            "/bookings/{id}/refund-preview",
            get(bookings::handlers::refund_preview),
        )
        .route(
            "/bookings/{id}/cancel",
            post(bookings::handlers::cancel_booking),
        )
        .route(
            "/bookings/{id}/payments",
            get(bookings::handlers::list_booking_payments),
        )
        .route(
            "/bookings/{id}/cancellation",
            get(bookings::handlers::get_booking_cancellation),
        )
        .route(
            "/bookings/{id}/seats",
            get(bookings::handlers::list_booking_seats),
        )
        // --- Payments ---
        .route("/payments/{id}", get(payments::handlers::get_payment))
        // --- Cancellations ---
        .route(
            "/cancellations",
            get(cancellations::handlers::list_cancellations),
        )
        .route(
            "/cancellations/{id}",
            get(cancellations::handlers::get_cancellation),
        )
        // --- Trips ---
        .route(
            "/trips",
            get(trips::handlers::list_trips).post(trips::handlers::create_trip),
        )
        .route("/trips/{id}", get(trips::handlers::get_trip))
        .route("/trips/{id}/seats", get(trips::handlers::list_trip_seats))
        // --- Vessels ---
        .route(
            "/vessels",
            get(vessels::handlers::list_vessels).post(vessels::handlers::create_vessel),
        )
        .route(
            "/vessels/{id}",
            get(vessels::handlers::get_vessel)
                .put(vessels::handlers::update_vessel)
                .delete(vessels::handlers::delete_vessel),
        )
        // --- Routes ---
        .route(
            "/routes",
            get(routes::handlers::list_routes).post(routes::handlers::create_route),
        )
        .route(
            "/routes/{id}",
            get(routes::handlers::get_route)
                .put(routes::handlers::update_route)
                .delete(routes::handlers::delete_route),
        )
        .with_state(unified);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = metrics::MetricsState {
        handle: prometheus_handle,
    };

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route(
            "/health",
            get(health::handlers::health_check).with_state(health_state),
        )
        // Prometheus metrics
        .route(
            "/metrics",
            get(metrics::handlers::render_metrics).with_state(metrics_state),
        )
        // API v1
        .nest("/api/v1", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
