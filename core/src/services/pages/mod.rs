//! Page lookup service module
//!
//! Resolves a requested page identifier for the dynamic page viewer,
//! including the fallback chain used when the page is missing.

mod service;

#[cfg(test)]
mod tests;

pub use service::PageService;
