mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AuthConfig, LogFormat, LoggingConfig, ServerConfig,
    MAX_TOKEN_LIFETIME_SECS,
};
