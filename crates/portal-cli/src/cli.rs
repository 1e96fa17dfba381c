//! CLI argument definitions.

use clap::{Parser, Subcommand};

use portal::ApiUrl;
use portal::types::{API_ENDPOINT_ENV, DEFAULT_API_ENDPOINT};

use crate::commands::{home, login, logout, register, status, whoami};

/// Command-line homepage for the portal API.
#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(author, version = env!("PORTAL_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL
    #[arg(long, global = true, env = API_ENDPOINT_ENV, default_value = DEFAULT_API_ENDPOINT)]
    pub api: ApiUrl,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account
    Register(register::RegisterArgs),

    /// Log in and store the session
    Login(login::LoginArgs),

    /// Show the homepage for the stored session
    Home(home::HomeArgs),

    /// Print the current user as JSON
    Whoami(whoami::WhoamiArgs),

    /// Clear the stored session
    Logout(logout::LogoutArgs),

    /// Report whether a session is stored
    Status(status::StatusArgs),
}
