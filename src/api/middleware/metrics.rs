//! Hit counting for the public API

use std::sync::Arc;

use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use crate::infrastructure::metrics::HitCounter;

/// Count the request, then pass it on
pub async fn count_hits(
    State(hits): State<Arc<HitCounter>>,
    request: Request,
    next: Next,
) -> Response {
    hits.record();
    next.run(request).await
}
