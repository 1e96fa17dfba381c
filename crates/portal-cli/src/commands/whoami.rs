//! Whoami command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use portal::http::endpoints::{GetUserInfoResponse, USER};
use portal::{ApiResponse, SessionStore};

use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the raw response envelope instead of the user
    #[arg(long)]
    pub envelope: bool,
}

pub async fn run(session: &SessionStore, args: WhoamiArgs) -> Result<()> {
    if args.envelope {
        let response: ApiResponse<GetUserInfoResponse> = session.client().get(USER).await;
        output::json_pretty(&response)?;

        if let Some(error) = response.error() {
            bail!("{}", error);
        }
        return Ok(());
    }

    if !session.is_authenticated() {
        bail!("No active session. Run 'portal login' first.");
    }

    let user = session
        .get_user_info()
        .await
        .context("Failed to fetch user info")?;

    output::json_pretty(&user)
}
