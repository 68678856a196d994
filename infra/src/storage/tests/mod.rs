//! Tests for the key-value store implementations

mod file_store_tests;
