//! API middleware components

pub mod logging;
pub mod metrics;
pub mod user_auth;

pub use logging::logging_middleware;
pub use metrics::count_hits;
pub use user_auth::{extract_bearer_token, RequireUser};
