//! Tests for page lookup service

#[cfg(test)]
mod service_tests;
