//! chart3d core
//!
//! Ambient utilities shared by the chart3d crates: logging setup and
//! profiling scopes.

pub mod logging;
pub mod profiling;
