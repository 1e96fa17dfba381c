//! Status command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use portal::{ApiUrl, SessionStore};

use crate::output;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    authenticated: bool,
    api: ApiUrl,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<u64>,
}

pub fn run(session: &SessionStore, args: StatusArgs) -> Result<()> {
    let tokens = session.stored_tokens();

    let report = StatusReport {
        authenticated: tokens.is_some(),
        api: session.client().api().clone(),
        expires_in: tokens.as_ref().map(|t| t.expires_in()),
    };

    if args.json {
        return output::json_pretty(&report);
    }

    if report.authenticated {
        output::success("Authenticated");
    } else {
        println!("Not authenticated");
    }
    output::field("API", &report.api.to_string());
    if let Some(expires_in) = report.expires_in {
        output::field("Expires in", &format!("{}s (at login)", expires_in));
    }

    Ok(())
}
