//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format (fresh snapshot per request)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::exposition;

pub const CONTENT_TYPE_TEXT_FORMAT: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    // Lock held only for the copy; encoding runs unlocked.
    let snapshot = state.store().snapshot();
    let mut body = exposition::encode(&snapshot);
    state.metrics().render(&mut body);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT_FORMAT)],
        body,
    )
        .into_response()
}
