//! Chirp domain

mod entity;
mod repository;
mod validation;

pub use entity::{Chirp, ChirpId};
pub use repository::ChirpRepository;
pub use validation::{
    clean_chirp_body, validate_chirp_body, ChirpValidationError, BANNED_WORDS, MAX_CHIRP_LENGTH,
};
