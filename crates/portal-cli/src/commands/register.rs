//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use portal::{Registration, SessionStore};

use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username for the new account
    #[arg(long)]
    pub username: String,

    /// Email address for the new account
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(session: &SessionStore, args: RegisterArgs) -> Result<()> {
    let registration = Registration::new(&args.username, &args.email, &args.password);

    output::progress("Registering...");

    session
        .register(&registration)
        .await
        .context("Registration failed")?;

    output::success("Account created");
    println!();
    output::field("Username", &args.username);
    output::field("Email", &args.email);
    println!();
    println!("Log in to start a session:");
    output::hint(&format!("portal login --username {}", args.username));

    Ok(())
}
