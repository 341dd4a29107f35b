//! Chirp repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Chirp, ChirpId};
use crate::domain::DomainError;

/// Repository trait for chirp storage
#[async_trait]
pub trait ChirpRepository: Send + Sync + Debug {
    async fn get(&self, id: &ChirpId) -> Result<Option<Chirp>, DomainError>;

    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError>;

    /// List all chirps, oldest first
    async fn list(&self) -> Result<Vec<Chirp>, DomainError>;

    /// Remove every chirp, returning how many were removed
    async fn clear(&self) -> Result<usize, DomainError>;
}
