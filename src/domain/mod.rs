//! Domain layer - entities, validation rules and repository traits

pub mod chirp;
pub mod error;
pub mod user;

pub use chirp::{Chirp, ChirpId, ChirpRepository};
pub use error::DomainError;
pub use user::{User, UserId, UserRepository};
