//! Integration tests for menu-guard.
//!
//! These tests drive the library through its public API and run the built
//! binary end to end.

pub mod binary_tests;
pub mod cli_tests;
