//! The homepage view model.
//!
//! Mirrors what the landing page shows once loading finishes: a prompt for
//! visitors without a session, the user's details, or an error.

use tracing::instrument;

use crate::auth::SessionStore;
use crate::types::User;

/// Message shown when loading fails without a usable error message.
pub const HOME_LOAD_FAILED: &str = "Failed to load user information";

/// The settled state of the homepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeView {
    /// No session is stored; the user should log in or register.
    Anonymous,
    /// The session is valid and the user was fetched.
    Loaded(User),
    /// A session is stored but fetching the user failed.
    Failed(String),
}

impl SessionStore {
    /// Resolve the homepage state.
    ///
    /// Without a stored session no request is made.
    #[instrument(skip(self))]
    pub async fn load_home(&self) -> HomeView {
        if !self.is_authenticated() {
            return HomeView::Anonymous;
        }

        match self.get_user_info().await {
            Ok(user) => HomeView::Loaded(user),
            Err(e) => {
                let message = e.to_string();
                if message.is_empty() {
                    HomeView::Failed(HOME_LOAD_FAILED.to_string())
                } else {
                    HomeView::Failed(message)
                }
            }
        }
    }
}
