//! Router assembly

use axum::{middleware, routing::get, Router};

use crate::api::middleware::{count_hits, logging_middleware};
use crate::api::state::AppState;
use crate::api::{admin, chirps, health, users};

/// Build the full HTTP router around the shared state.
///
/// Only `/api` requests count towards the hit counter shown on
/// `/admin/metrics`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/healthz", get(health::healthz))
        .merge(users::create_users_router())
        .merge(chirps::create_chirps_router())
        .layer(middleware::from_fn_with_state(
            state.hits.clone(),
            count_hits,
        ));

    Router::new()
        .nest("/api", api)
        .nest("/admin", admin::create_admin_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
