use serde::Deserialize;

use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Token signing settings
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to sign and verify bearer tokens
    #[serde(default)]
    pub jwt_secret: String,
    /// Default and maximum token lifetime, in seconds
    #[serde(default = "default_token_lifetime_secs")]
    pub token_lifetime_secs: i64,
}

fn default_token_lifetime_secs() -> i64 {
    3600
}

/// Upper bound for `auth.token_lifetime_secs` (30 days)
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 30 * 24 * 60 * 60;

/// Admin endpoint settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Allow `POST /admin/reset` to wipe users and chirps
    pub reset_enabled: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[hidden]")
            .field("token_lifetime_secs", &self.token_lifetime_secs)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_lifetime_secs: default_token_lifetime_secs(),
        }
    }
}

impl AuthConfig {
    /// Reject settings the token service cannot run with
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.jwt_secret.is_empty() {
            return Err(DomainError::configuration(
                "auth.jwt_secret must be set (APP_AUTH__JWT_SECRET)",
            ));
        }

        self.token_lifetime().map(|_| ())
    }

    /// Configured lifetime, rejected when outside `1..=MAX_TOKEN_LIFETIME_SECS`
    pub fn token_lifetime(&self) -> Result<chrono::Duration, DomainError> {
        if !(1..=MAX_TOKEN_LIFETIME_SECS).contains(&self.token_lifetime_secs) {
            return Err(DomainError::configuration(format!(
                "auth.token_lifetime_secs must be between 1 and {}",
                MAX_TOKEN_LIFETIME_SECS
            )));
        }

        chrono::Duration::try_seconds(self.token_lifetime_secs).ok_or_else(|| {
            DomainError::configuration("auth.token_lifetime_secs is out of range")
        })
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
