//! User infrastructure module
//!
//! In-memory user repository and the user service that drives registration
//! and login through the password hasher.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService};
