//! Authentication service module
//!
//! This module resolves an identifier/secret pair against the account
//! directory, records the resulting session, and derives the landing route
//! for the matched record.

mod config;
mod delay;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use delay::ResultDelay;
pub use service::{login_failure_message, AuthService};
