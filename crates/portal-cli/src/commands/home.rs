//! Home command implementation.
//!
//! Renders the landing page: a prompt when there is no session, otherwise
//! the user's details or the error that prevented loading them.

use anyhow::{Result, bail};
use chrono::Local;
use clap::Args;

use portal::{HomeView, SessionStore, User};

use crate::output;

const TITLE: &str = "Welcome to Serverless Application Deployment Demo";

#[derive(Args, Debug)]
pub struct HomeArgs {}

pub async fn run(session: &SessionStore, _args: HomeArgs) -> Result<()> {
    if session.is_authenticated() {
        output::progress("Loading...");
    }

    let view = session.load_home().await;

    output::heading(TITLE);
    println!();

    match view {
        HomeView::Anonymous => {
            println!("Please log in or register to access the application.");
            println!();
            output::hint("portal login --username <name> --password <password>");
            output::hint("portal register --username <name> --email <email> --password <password>");
            Ok(())
        }
        HomeView::Loaded(user) => {
            render_user(&user);
            Ok(())
        }
        HomeView::Failed(message) => bail!(message),
    }
}

fn render_user(user: &User) {
    output::heading("User Information");
    output::field("Username", &user.username);
    output::field("Email", &user.email);
    output::field("User ID", &user.id.to_string());
    output::field("Cognito ID", &user.cognito_id);
    output::field(
        "Created",
        &user
            .created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    );
}
