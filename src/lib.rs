//! Chirpy
//!
//! A small posting service built around a credential and session-token core:
//! - Argon2 password hashing with constant-time verification
//! - HS256 bearer tokens carrying a user ID as their subject
//! - Registration, login and chirp endpoints on top of in-memory storage
//! - Admin hit metrics and an opt-in storage reset

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    auth::{Argon2Hasher, JwtConfig, JwtService},
    chirp::{ChirpService, InMemoryChirpRepository},
    user::{InMemoryUserRepository, UserService},
};
use tracing::info;

/// Create the application state from validated configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    config.auth.validate()?;

    let jwt_service = JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_lifetime()?,
    ));

    let user_service = UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(Argon2Hasher::new()),
    );
    let chirp_service = ChirpService::new(Arc::new(InMemoryChirpRepository::new()));

    info!(
        token_lifetime_secs = config.auth.token_lifetime_secs,
        reset_enabled = config.admin.reset_enabled,
        "Using in-memory storage"
    );

    Ok(AppState::new(
        Arc::new(user_service),
        Arc::new(chirp_service),
        Arc::new(jwt_service),
    )
    .with_reset_enabled(config.admin.reset_enabled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_requires_secret() {
        let config = AppConfig::default();
        assert!(create_app_state(&config).is_err());
    }

    #[test]
    fn test_create_app_state_rejects_huge_lifetime() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "supersecretkey".to_string();
        config.auth.token_lifetime_secs = i64::MAX;

        assert!(create_app_state(&config).is_err());
    }

    #[test]
    fn test_create_app_state() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "supersecretkey".to_string();

        let state = create_app_state(&config).unwrap();
        assert_eq!(
            state.jwt_service.token_lifetime(),
            chrono::Duration::hours(1)
        );
        assert!(!state.reset_enabled);
    }
}
