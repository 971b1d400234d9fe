use rayon::prelude::*;
use serde::Serialize;
use std::ops::AddAssign;
use std::path::PathBuf;
use walkdir::WalkDir;

use super::engine::{check_root, dedup_targets};
use super::target::SweepTarget;

/// What a sweep would visit, computed without deleting anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepEstimate {
    /// Files and symlinks within the depth limit.
    pub files: u64,
    /// Their total size in bytes.
    pub bytes: u64,
    /// Roots that were missing, not directories, or unreadable.
    pub unavailable_roots: Vec<PathBuf>,
}

impl SweepEstimate {
    /// Human-readable total size
    pub fn bytes_human(&self) -> String {
        humansize::format_size(self.bytes, humansize::BINARY)
    }
}

impl AddAssign for SweepEstimate {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.bytes += other.bytes;
        self.unavailable_roots.extend(other.unavailable_roots);
    }
}

/// Estimate a single target.
pub fn analyze(target: &SweepTarget) -> SweepEstimate {
    let root = &target.root_path;
    if let Err(reason) = check_root(root) {
        tracing::debug!(root = %root.display(), %reason, "Analysis root unavailable");
        return SweepEstimate {
            unavailable_roots: vec![root.clone()],
            ..SweepEstimate::default()
        };
    }

    // walkdir depth 1 is our depth 0, and entries at our max depth are
    // listed but not descended.
    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if let Some(depth) = target.max_depth {
        walker = walker.max_depth(depth + 1);
    }

    let mut estimate = SweepEstimate::default();
    for entry in walker.into_iter().flatten() {
        let file_type = entry.file_type();
        if !(file_type.is_file() || file_type.is_symlink()) {
            continue;
        }
        if let Ok(metadata) = entry.metadata() {
            estimate.files += 1;
            estimate.bytes += metadata.len();
        }
    }

    estimate
}

/// Estimate several targets in parallel, skipping duplicate roots.
pub fn analyze_many(targets: &[SweepTarget]) -> SweepEstimate {
    dedup_targets(targets)
        .into_par_iter()
        .map(analyze)
        .reduce(SweepEstimate::default, |mut acc, e| {
            acc += e;
            acc
        })
}
