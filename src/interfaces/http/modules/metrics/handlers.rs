//! Prometheus metrics endpoint

use axum::extract::State;
use metrics_exporter_prometheus::PrometheusHandle;

/// Metrics handler state
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Monitoring",
    responses(
        (status = 200, description = "Prometheus exposition text", body = String)
    )
)]
pub async fn render_metrics(State(state): State<MetricsState>) -> String {
    state.handle.render()
}
