//! Subcommand implementations.

pub mod home;
pub mod login;
pub mod logout;
pub mod register;
pub mod status;
pub mod whoami;
