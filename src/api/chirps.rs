//! Chirp endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::chirp::Chirp;

pub fn create_chirps_router() -> Router<AppState> {
    Router::new()
        .route("/chirps", get(list_chirps).post(create_chirp))
        .route("/chirps/{id}", get(get_chirp))
}

#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ChirpResponse {
    pub id: String,
    pub body: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Chirp> for ChirpResponse {
    fn from(chirp: &Chirp) -> Self {
        Self {
            id: chirp.id().to_string(),
            body: chirp.body().to_string(),
            user_id: chirp.user_id().to_string(),
            created_at: chirp.created_at().to_rfc3339(),
            updated_at: chirp.updated_at().to_rfc3339(),
        }
    }
}

/// POST /api/chirps
///
/// The author is the subject of the presented bearer token.
pub async fn create_chirp(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(request): Json<CreateChirpRequest>,
) -> Result<(StatusCode, Json<ChirpResponse>), ApiError> {
    let chirp = state.chirp_service.create(user_id, &request.body).await?;

    Ok((StatusCode::CREATED, Json(ChirpResponse::from(&chirp))))
}

/// GET /api/chirps
pub async fn list_chirps(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChirpResponse>>, ApiError> {
    let chirps = state.chirp_service.list().await?;

    Ok(Json(chirps.iter().map(ChirpResponse::from).collect()))
}

/// GET /api/chirps/{id}
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChirpResponse>, ApiError> {
    let chirp = state.chirp_service.get(&id).await?;

    Ok(Json(ChirpResponse::from(&chirp)))
}
