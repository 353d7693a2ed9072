//! Test helpers module
//!
//! Utilities for testing HostelMate against a mock hostel backend: the
//! wiremock server, canned records and a test context wiring them up.

#![allow(dead_code)]

pub mod hostel_mock;
pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
