//! Chirp infrastructure module

mod repository;
mod service;

pub use repository::InMemoryChirpRepository;
pub use service::ChirpService;
