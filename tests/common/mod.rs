//! Test utilities shared between the fake-service suite and the live suite.
//! This module is accessible in both tests/api and tests/api-live.
#![allow(dead_code, unused_imports)]

pub mod fake_service;
pub mod test_data;

// Re-export commonly used items for convenience
pub use helpers::*;
pub use test_app::{TestApp, spawn_app, spawn_live_app};
pub use test_data::*;
