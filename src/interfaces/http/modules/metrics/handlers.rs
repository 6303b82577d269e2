//! `GET /metrics` in Prometheus text format

use axum::{extract::State, http::header, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::SharedUserRegistry;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
    pub registry: SharedUserRegistry,
}

/// Refreshes the `registry_users` gauge, then renders everything the recorder holds.
pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    metrics::gauge!("registry_users").set(state.registry.len() as f64);

    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.handle.render(),
    )
}
