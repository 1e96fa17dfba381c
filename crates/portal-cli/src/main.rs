//! portal - command-line homepage for the portal API.
//!
//! This is a thin wrapper over the `portal` library: it keeps the session in
//! the user's data directory and renders what the web homepage shows.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{home, login, logout, register, status, whoami};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up API_ENDPOINT from a .env file before clap reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let session = session::open(cli.api)?;

    match cli.command {
        Commands::Register(args) => register::run(&session, args).await,
        Commands::Login(args) => login::run(&session, args).await,
        Commands::Home(args) => home::run(&session, args).await,
        Commands::Whoami(args) => whoami::run(&session, args).await,
        Commands::Logout(args) => logout::run(&session, args),
        Commands::Status(args) => status::run(&session, args),
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
