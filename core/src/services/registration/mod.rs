//! Registration intake service module
//!
//! Accepts new sign-up requests and appends them to the pending collection
//! for later administrator review.

mod service;

#[cfg(test)]
mod tests;

pub use service::RegistrationService;
