//! Hash-password command - prints an Argon2 hash for seeding users by hand

use clap::Args;

use crate::infrastructure::auth::{hash_password, verify_password};

/// Arguments for the hash-password command
#[derive(Args, Clone)]
pub struct HashPasswordArgs {
    /// Plaintext password to hash
    pub password: String,

    /// Also check the produced hash against the password before printing it
    #[arg(long)]
    pub verify: bool,
}

pub fn run(args: HashPasswordArgs) -> anyhow::Result<()> {
    let hash = render(&args)?;
    println!("{}", hash);
    Ok(())
}

fn render(args: &HashPasswordArgs) -> anyhow::Result<String> {
    let hash = hash_password(&args.password)?;

    if args.verify {
        verify_password(&hash, &args.password)?;
    }

    Ok(hash)
}
