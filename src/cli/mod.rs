//! CLI module for Chirpy
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `hash-password`: print an Argon2 hash for a password

pub mod hash_password;
pub mod serve;

use clap::{Parser, Subcommand};

/// Chirpy - post short messages behind bearer-token auth
#[derive(Parser)]
#[command(name = "chirpy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Hash a password with Argon2 and print the result
    HashPassword(hash_password::HashPasswordArgs),
}
