use serde::Serialize;
use std::ops::AddAssign;
use std::path::PathBuf;

/// Counters produced by one sweep call.
///
/// A fresh value is created per call and handed back by value; aggregate
/// results are built by summing with `+=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepStats {
    /// Files (and symlinks) visited and classified.
    pub files_scanned: u64,
    /// Files successfully removed.
    pub files_deleted: u64,
    /// Sum of the sizes of the removed files, captured before removal.
    pub bytes_freed: u64,
    /// Locked entries, failed deletions and unreadable subdirectories.
    pub errors: u64,
    /// Directories removed because the sweep emptied them.
    pub dirs_removed: u64,
    /// Roots that were missing, not directories, or unreadable.
    pub unavailable_roots: Vec<PathBuf>,
    /// The sweep stopped early on request.
    pub cancelled: bool,
}

impl SweepStats {
    /// Zero-effect result for a root that failed its precondition check.
    pub fn root_unavailable(root: impl Into<PathBuf>) -> Self {
        Self {
            unavailable_roots: vec![root.into()],
            ..Self::default()
        }
    }

    /// Whether any root could not be swept.
    pub fn has_unavailable_root(&self) -> bool {
        !self.unavailable_roots.is_empty()
    }

    /// Whether the sweep touched nothing.
    pub fn is_empty(&self) -> bool {
        self.files_scanned == 0 && self.dirs_removed == 0 && self.errors == 0
    }

    /// Percentage of scanned files that were deleted (0 when nothing scanned).
    pub fn success_rate(&self) -> f64 {
        if self.files_scanned == 0 {
            0.0
        } else {
            self.files_deleted as f64 / self.files_scanned as f64 * 100.0
        }
    }

    /// Human-readable bytes freed
    pub fn freed_human(&self) -> String {
        humansize::format_size(self.bytes_freed, humansize::BINARY)
    }
}

impl AddAssign for SweepStats {
    fn add_assign(&mut self, other: Self) {
        self.files_scanned += other.files_scanned;
        self.files_deleted += other.files_deleted;
        self.bytes_freed += other.bytes_freed;
        self.errors += other.errors;
        self.dirs_removed += other.dirs_removed;
        self.unavailable_roots.extend(other.unavailable_roots);
        self.cancelled |= other.cancelled;
    }
}

impl std::iter::Sum for SweepStats {
    fn sum<I: Iterator<Item = SweepStats>>(iter: I) -> Self {
        iter.fold(SweepStats::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}
