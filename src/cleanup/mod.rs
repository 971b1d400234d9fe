//! Cleanup orchestration: assemble targets into a plan, sweep it on a
//! worker thread, and collect per-category results.

mod plan;
mod runner;
#[cfg(unix)]
mod signals;
mod worker;

pub use plan::{CleanupCategory, CleanupPlan, SkippedCategory};
pub use runner::{CategoryResult, CleanupOutcome, CleanupRunner};
#[cfg(unix)]
pub use signals::install_cancel_handler;
pub use worker::{CleanupWorker, ProgressUpdate};
