use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChirpValidationError {
    #[error("Chirp ID is not a valid UUID: '{0}'")]
    InvalidId(String),

    #[error("Chirp body cannot be empty")]
    EmptyBody,

    #[error("Chirp is too long. Maximum length is {0} characters")]
    TooLong(usize),
}

pub const MAX_CHIRP_LENGTH: usize = 140;

pub fn validate_chirp_body(body: &str) -> Result<(), ChirpValidationError> {
    if body.trim().is_empty() {
        return Err(ChirpValidationError::EmptyBody);
    }

    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(ChirpValidationError::TooLong(MAX_CHIRP_LENGTH));
    }

    Ok(())
}

/// Words masked out of chirp bodies
pub const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const MASK: &str = "****";

/// Replace banned words with `****`.
///
/// Words are split on single spaces and compared case-insensitively; a banned
/// word with punctuation attached (`"Sharbert!"`) is left alone.
pub fn clean_chirp_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            if BANNED_WORDS.contains(&lower.as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
