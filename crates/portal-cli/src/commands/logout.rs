//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use portal::SessionStore;

use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(session: &SessionStore, _args: LogoutArgs) -> Result<()> {
    let was_authenticated = session.is_authenticated();
    session.logout();

    if was_authenticated {
        output::success("Logged out");
    } else {
        output::success("No active session");
    }

    Ok(())
}
