//! Admin endpoints: hit metrics and a storage reset for local development

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/reset", post(reset))
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub users_removed: usize,
    pub chirps_removed: usize,
    pub hits_cleared: u64,
}

/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(render_metrics(state.hits.hits()))
}

fn render_metrics(hits: u64) -> String {
    format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>\n",
        hits
    )
}

/// POST /admin/reset
///
/// Removes every chirp and user and zeroes the hit counter. Refused unless
/// `admin.reset_enabled` is set.
pub async fn reset(State(state): State<AppState>) -> Result<Json<ResetResponse>, ApiError> {
    if !state.reset_enabled {
        warn!("Rejected reset request, admin.reset_enabled is off");
        return Err(ApiError::forbidden("Reset is disabled"));
    }

    let chirps_removed = state.chirp_service.clear().await?;
    let users_removed = state.user_service.clear().await?;
    let hits_cleared = state.hits.reset();

    info!(users_removed, chirps_removed, hits_cleared, "Storage reset");

    Ok(Json(ResetResponse {
        users_removed,
        chirps_removed,
        hits_cleared,
    }))
}
