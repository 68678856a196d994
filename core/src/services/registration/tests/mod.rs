//! Tests for registration intake service

#[cfg(test)]
mod service_tests;
