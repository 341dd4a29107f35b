//! Registration and login endpoints

use axum::{extract::State, http::StatusCode, routing::post, Router};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::CreateUserRequest;

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/login", post(login))
}

/// Registration request
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Optional shorter lifetime for the issued token
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

/// User response (safe to expose)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl UserResponse {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
        }
    }
}

/// Login response
#[derive(Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
}

/// Register a new user
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .user_service
        .create(CreateUserRequest {
            email: request.email,
            password: request.password,
        })
        .await?;

    info!(user_id = %user.id(), "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(&user))))
}

/// Login with email and password
///
/// POST /api/login
///
/// Returns the user and a bearer token on successful authentication.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.email, &request.password)
        .await?;

    let lifetime = login_lifetime(request.expires_in_seconds, state.jwt_service.token_lifetime());
    let token = state.jwt_service.generate(user.id(), lifetime)?;

    info!(user_id = %user.id(), "User logged in");

    Ok(Json(LoginResponse {
        user: UserResponse::from_user(&user),
        token,
    }))
}

/// Lifetime for a login token: the client may ask for a shorter one than the
/// configured maximum; anything else falls back to the maximum.
fn login_lifetime(requested_secs: Option<i64>, max: Duration) -> Duration {
    requested_secs
        .filter(|secs| *secs > 0)
        .and_then(Duration::try_seconds)
        .filter(|requested| *requested < max)
        .unwrap_or(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_lifetime_defaults_to_max() {
        let max = Duration::hours(1);

        assert_eq!(login_lifetime(None, max), max);
        assert_eq!(login_lifetime(Some(0), max), max);
        assert_eq!(login_lifetime(Some(-5), max), max);
    }

    #[test]
    fn test_login_lifetime_clamped() {
        let max = Duration::hours(1);

        assert_eq!(login_lifetime(Some(60), max), Duration::seconds(60));
        assert_eq!(login_lifetime(Some(7200), max), max);
        assert_eq!(login_lifetime(Some(i64::MAX), max), max);
    }

    #[test]
    fn test_login_response_is_flat() {
        let response = LoginResponse {
            user: UserResponse {
                id: "id".to_string(),
                email: "walt@breakingbad.com".to_string(),
                created_at: "c".to_string(),
                updated_at: "u".to_string(),
            },
            token: "t".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["email"], "walt@breakingbad.com");
        assert_eq!(json["token"], "t");
        assert!(json.get("user").is_none());
    }
}
