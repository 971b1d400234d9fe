//! Temp Sweeper - A temporary file and browser cache cleanup utility
//!
//! This crate provides functionality for:
//! - Sweeping directory trees while skipping files held open by other processes
//! - Discovering system temp directories and browser caches
//! - Reporting freed space alongside disk and memory usage

pub mod cleanup;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod sweeper;
pub mod system;
pub mod targets;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweepErrorKind, SweeperError};
pub use sweeper::{sweep, sweep_many, SweepStats, SweepTarget, Sweeper};
