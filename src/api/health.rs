//! Health check endpoint

use axum::{http::header, http::StatusCode, response::IntoResponse};

/// Liveness check: returns 200 with a plain-text body while the service runs
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}
