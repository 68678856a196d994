//! Password recovery service module
//!
//! Resolves an identifier/phone pair against the approved directory and the
//! pending registration collection, classifying the result into one of four
//! terminal outcomes.

mod service;

#[cfg(test)]
mod tests;

pub use service::{recovery_failure_message, RecoveryService};
