//! Chirp entity and identifier

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::ChirpValidationError;
use crate::domain::user::UserId;

/// Chirp identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChirpId(Uuid);

impl ChirpId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(id: &str) -> Result<Self, ChirpValidationError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| ChirpValidationError::InvalidId(id.to_string()))
    }
}

impl FromStr for ChirpId {
    type Err = ChirpValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ChirpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A short post written by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chirp {
    id: ChirpId,
    body: String,
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Chirp {
    /// Create a new chirp authored by `user_id`
    pub fn new(id: ChirpId, user_id: UserId, body: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            body: body.into(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &ChirpId {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
