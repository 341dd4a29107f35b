//! Infrastructure layer - password hashing, tokens, storage, metrics and logging

pub mod auth;
pub mod chirp;
pub mod logging;
pub mod metrics;
pub mod user;
