//! Authentication types and session management.
//!
//! All authenticated operations go through a [`SessionStore`].

mod credentials;
mod session;
mod tokens;

pub use credentials::{Credentials, Registration};
pub use session::SessionStore;
pub use tokens::AuthTokens;
