use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SweepErrorKind;

use super::lock::{default_probe, LockProbe};
use super::progress::{Progress, Span};
use super::stats::SweepStats;
use super::target::{FileCandidate, SweepTarget};

/// What a directory entry turned out to be.
#[derive(Debug)]
pub(crate) enum Entry {
    /// Regular file
    File(FileCandidate),
    /// Symbolic link; only the link itself is ever removed
    Link(FileCandidate),
    Dir(FileCandidate),
    /// FIFO, socket, device: never touched
    Special,
}

impl Entry {
    /// Inspect `path` without following symlinks.
    pub(crate) fn inspect(path: &Path) -> io::Result<Entry> {
        let metadata = fs::symlink_metadata(path)?;
        let file_type = metadata.file_type();

        Ok(if file_type.is_symlink() {
            Entry::Link(FileCandidate::file(path, metadata.len()))
        } else if file_type.is_dir() {
            Entry::Dir(FileCandidate::directory(path))
        } else if file_type.is_file() {
            Entry::File(FileCandidate::file(path, metadata.len()))
        } else {
            Entry::Special
        })
    }
}

/// Check that `root` can be swept: it exists, is a directory, and is readable.
pub(crate) fn check_root(root: &Path) -> Result<Vec<PathBuf>, String> {
    match fs::metadata(root) {
        Ok(m) if m.is_dir() => {}
        Ok(_) => return Err("not a directory".to_string()),
        Err(e) => return Err(e.to_string()),
    }

    let read_dir = fs::read_dir(root).map_err(|e| e.to_string())?;
    Ok(read_dir.filter_map(|e| e.ok()).map(|e| e.path()).collect())
}

/// Drop targets whose resolved root was already seen, keeping the first.
pub fn dedup_targets(targets: &[SweepTarget]) -> Vec<&SweepTarget> {
    let mut seen = HashSet::new();
    targets
        .iter()
        .filter(|target| {
            let fresh = seen.insert(target.resolved_root());
            if !fresh {
                tracing::debug!(
                    root = %target.root_path.display(),
                    "Skipping duplicate sweep target"
                );
            }
            fresh
        })
        .collect()
}

/// Recursive delete-and-account engine.
///
/// Holds only configuration; every sweep call builds its own `SweepStats`.
/// Calls run on the caller's thread. Overlapping targets must not be swept
/// concurrently.
pub struct Sweeper {
    probe: Box<dyn LockProbe>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for Sweeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Sweeper {
    /// Create a sweeper using the platform lock probe.
    pub fn new() -> Self {
        Self {
            probe: default_probe(),
            cancel: None,
        }
    }

    /// Replace the lock probe.
    pub fn with_probe(mut self, probe: impl LockProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Stop between entries once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Sweep a single target.
    pub fn sweep(&self, target: &SweepTarget) -> SweepStats {
        self.sweep_in(target, &mut Progress::silent(), Span::FULL)
    }

    /// Sweep a single target, reporting `(percentage, message)` as it goes.
    pub fn sweep_with_progress(
        &self,
        target: &SweepTarget,
        on_progress: &mut dyn FnMut(u8, &str),
    ) -> SweepStats {
        let mut progress = Progress::new(on_progress);
        let stats = self.sweep_in(target, &mut progress, Span::FULL);
        progress.report(100, "Sweep complete");
        stats
    }

    /// Sweep several targets, summing the results.
    ///
    /// Targets resolving to the same directory are swept once. Nested but
    /// distinct roots are not merged and may count files twice.
    pub fn sweep_many(&self, targets: &[SweepTarget]) -> SweepStats {
        self.sweep_many_in(targets, &mut Progress::silent(), Span::FULL)
    }

    /// `sweep_many` with progress reporting.
    pub fn sweep_many_with_progress(
        &self,
        targets: &[SweepTarget],
        on_progress: &mut dyn FnMut(u8, &str),
    ) -> SweepStats {
        let mut progress = Progress::new(on_progress);
        let stats = self.sweep_many_in(targets, &mut progress, Span::FULL);
        progress.report(100, "Sweep complete");
        stats
    }

    /// `sweep_many` reporting into a slice of an outer progress range.
    pub fn sweep_many_in(
        &self,
        targets: &[SweepTarget],
        progress: &mut Progress<'_>,
        span: Span,
    ) -> SweepStats {
        let unique = dedup_targets(targets);
        let mut total = SweepStats::default();

        for (i, target) in unique.iter().enumerate() {
            if self.is_cancelled() {
                total.cancelled = true;
                break;
            }
            total += self.sweep_in(target, progress, span.part(i, unique.len()));
        }

        total
    }

    /// `sweep` reporting into a slice of an outer progress range.
    pub fn sweep_in(
        &self,
        target: &SweepTarget,
        progress: &mut Progress<'_>,
        span: Span,
    ) -> SweepStats {
        let root = &target.root_path;
        let message = format!("Sweeping {}", root.display());

        let entries = match check_root(root) {
            Ok(entries) => entries,
            Err(reason) => {
                tracing::warn!(
                    root = %root.display(),
                    kind = ?SweepErrorKind::RootUnavailable,
                    %reason,
                    "Sweep root unavailable"
                );
                progress.report(span.at(1, 1), &message);
                return SweepStats::root_unavailable(root.clone());
            }
        };

        tracing::info!(root = %root.display(), max_depth = ?target.max_depth, "Sweeping directory");
        progress.report(span.at(0, 1), &message);

        let mut stats = SweepStats::default();
        let total = entries.len();
        for (i, path) in entries.iter().enumerate() {
            if self.is_cancelled() {
                stats.cancelled = true;
                break;
            }
            self.visit(path, 0, target, &mut stats);
            progress.report(span.at(i + 1, total), &message);
        }
        progress.report(span.at(1, 1), &message);

        tracing::info!(
            root = %root.display(),
            scanned = stats.files_scanned,
            deleted = stats.files_deleted,
            freed = stats.bytes_freed,
            errors = stats.errors,
            "Sweep finished"
        );

        stats
    }

    /// Process one entry found at `depth` (0 = child of the root).
    fn visit(&self, path: &Path, depth: usize, target: &SweepTarget, stats: &mut SweepStats) {
        let entry = match Entry::inspect(path) {
            Ok(entry) => entry,
            Err(err) => {
                self.record_failure(path, &err, "Cannot inspect entry", stats);
                return;
            }
        };

        match entry {
            Entry::File(file) => self.delete_file(&file, true, stats),
            Entry::Link(link) => self.delete_file(&link, false, stats),
            Entry::Dir(dir) => {
                if target.may_descend(depth) {
                    self.sweep_dir(&dir.path, depth + 1, target, stats);
                } else {
                    tracing::trace!(path = %path.display(), "Depth limit reached");
                }
            }
            Entry::Special => {
                tracing::trace!(path = %path.display(), "Skipping special file");
            }
        }
    }

    /// Sweep a subdirectory's children (at `depth`), then remove it if empty.
    fn sweep_dir(&self, dir: &Path, depth: usize, target: &SweepTarget, stats: &mut SweepStats) {
        let children: Vec<PathBuf> = match fs::read_dir(dir) {
            Ok(rd) => rd.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
            Err(err) => {
                self.record_failure(dir, &err, "Cannot read directory", stats);
                return;
            }
        };

        for child in &children {
            if self.is_cancelled() {
                stats.cancelled = true;
                return;
            }
            self.visit(child, depth, target, stats);
        }

        if target.remove_empty_dirs {
            // remove_dir refuses non-empty directories, which is the check we want.
            match fs::remove_dir(dir) {
                Ok(()) => {
                    stats.dirs_removed += 1;
                    tracing::debug!(path = %dir.display(), "Removed empty directory");
                }
                Err(err) => {
                    tracing::trace!(path = %dir.display(), error = %err, "Directory kept");
                }
            }
        }
    }

    fn delete_file(&self, file: &FileCandidate, probe: bool, stats: &mut SweepStats) {
        let path = &file.path;
        stats.files_scanned += 1;

        if probe && self.probe.is_locked(path) {
            if !path.exists() {
                tracing::debug!(path = %path.display(), "File vanished before deletion");
                return;
            }
            stats.errors += 1;
            tracing::warn!(path = %path.display(), kind = ?SweepErrorKind::Locked, "File in use, skipping");
            return;
        }

        match fs::remove_file(path) {
            Ok(()) => {
                stats.files_deleted += 1;
                stats.bytes_freed += file.size_bytes;
                tracing::debug!(path = %path.display(), bytes = file.size_bytes, "Deleted");
            }
            Err(err) => self.record_failure(path, &err, "Failed to delete", stats),
        }
    }

    fn record_failure(&self, path: &Path, err: &io::Error, what: &str, stats: &mut SweepStats) {
        let kind = SweepErrorKind::classify(err);
        if kind.is_counted() {
            stats.errors += 1;
            tracing::warn!(path = %path.display(), ?kind, error = %err, "{}", what);
        } else {
            tracing::debug!(path = %path.display(), "Entry vanished during sweep");
        }
    }
}
