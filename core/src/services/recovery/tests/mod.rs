//! Tests for password recovery service
