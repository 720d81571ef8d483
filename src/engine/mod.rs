//! Driver engine module.
//!
//! Provides the driver and its run report.

pub mod orchestrator;
pub mod result;
