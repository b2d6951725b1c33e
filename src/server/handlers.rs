//! # HTTP Handlers
//!
//! Thin adapters between axum extractors and the functions in
//! [`crate::processing`]. Bodies are plain text. An
//! [`InputError`] becomes a 500 response whose body is the error message.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error, info};
use serde::Deserialize;
use std::sync::Arc;

use crate::common::error::InputError;
use crate::processing::{grade_report, path_difference, student_info, top_ter_word};
use crate::server::metrics::ServiceMetrics;

/// State shared by all handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub metrics: ServiceMetrics,
}

impl AppState {
    /// Run one request through `process`, logging it and updating counters.
    fn process<F>(&self, endpoint: &str, process: F) -> Result<String, ApiError>
    where
        F: FnOnce() -> Result<String, InputError>,
    {
        let request_id = rand::random::<u64>();
        info!("📥 [{:016x}] GET {}", request_id, endpoint);
        self.metrics.increment_total_requests();

        match process() {
            Ok(body) => {
                self.metrics.increment_successful_requests();
                debug!("📤 [{:016x}] {}", request_id, body.replace('\n', " | "));
                Ok(body)
            }
            Err(e) => {
                self.metrics.increment_failed_requests();
                error!("❌ [{:016x}] {} failed: {}", request_id, endpoint, e);
                Err(ApiError(e))
            }
        }
    }
}

/// Error response for rejected input.
#[derive(Debug)]
pub struct ApiError(pub InputError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct NimQuery {
    pub nim: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EncodedQuery {
    #[serde(rename = "strBase64")]
    pub str_base64: String,
}

/// `GET /informasi-nim?nim=...`
pub async fn informasi_nim(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NimQuery>,
) -> Result<String, ApiError> {
    state.process("/informasi-nim", || student_info(query.nim.as_deref()))
}

/// `GET /perolehan-nilai?strBase64=...`
pub async fn perolehan_nilai(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EncodedQuery>,
) -> Result<String, ApiError> {
    state.process("/perolehan-nilai", || grade_report(&query.str_base64))
}

/// `GET /perbedaan-l?strBase64=...`
pub async fn perbedaan_l(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EncodedQuery>,
) -> Result<String, ApiError> {
    state.process("/perbedaan-l", || path_difference(&query.str_base64))
}

/// `GET /paling-ter?strBase64=...`
pub async fn paling_ter(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EncodedQuery>,
) -> Result<String, ApiError> {
    state.process("/paling-ter", || top_ter_word(&query.str_base64))
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "requests": state.metrics.snapshot(),
    }))
}
