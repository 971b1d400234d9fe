//! The sweep engine: walk a directory tree, skip files in use, delete the
//! rest, and account for what was freed.

mod analyze;
mod engine;
mod lock;
mod progress;
mod stats;
mod target;

pub use analyze::{analyze, analyze_many, SweepEstimate};
pub use engine::{dedup_targets, Sweeper};
pub use lock::{default_probe, is_locked, LockProbe, PlatformProbe, RenameProbe};
pub use progress::{Progress, Span};
pub use stats::SweepStats;
pub use target::{FileCandidate, SweepTarget};

#[cfg(unix)]
pub use lock::AdvisoryLockProbe;
#[cfg(windows)]
pub use lock::ShareModeProbe;

/// Sweep one target with the platform lock probe.
pub fn sweep(target: &SweepTarget) -> SweepStats {
    Sweeper::new().sweep(target)
}

/// Sweep several targets with the platform lock probe.
pub fn sweep_many(targets: &[SweepTarget]) -> SweepStats {
    Sweeper::new().sweep_many(targets)
}
