//! Admin console service module
//!
//! Management operations over the user, registration, and page collections:
//! CRUD for users and pages, approval and rejection of pending sign-ups, and
//! directory statistics. Every mutation rewrites the affected collection in
//! the store (last write wins).

mod service;

#[cfg(test)]
mod tests;

pub use service::AdminService;
