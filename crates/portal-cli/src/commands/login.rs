//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use portal::{Credentials, SessionStore};

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(session: &SessionStore, args: LoginArgs) -> Result<()> {
    let credentials = Credentials::new(&args.username, &args.password);

    output::progress("Logging in...");

    let tokens = session
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("Username", credentials.username());
    output::field("API", &session.client().api().to_string());
    output::field("Expires in", &format!("{}s", tokens.expires_in()));

    Ok(())
}
