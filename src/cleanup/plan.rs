//! Which directories a cleanup will sweep, grouped into report categories.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::SweepConfig;
use crate::sweeper::SweepTarget;
use crate::targets::{temp_targets, BrowserRegistry, RunningProcesses};

/// A named group of targets swept together with `sweep_many`.
#[derive(Debug, Clone)]
pub struct CleanupCategory {
    /// Report label (e.g., "Temporary Files", "Google Chrome")
    pub label: String,
    pub targets: Vec<SweepTarget>,
}

/// A category left out of the plan, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCategory {
    pub label: String,
    pub reason: String,
}

/// Ordered list of categories to sweep.
#[derive(Debug, Clone, Default)]
pub struct CleanupPlan {
    pub categories: Vec<CleanupCategory>,
    pub skipped: Vec<SkippedCategory>,
}

impl CleanupPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. Empty categories are ignored.
    pub fn add(&mut self, label: impl Into<String>, targets: Vec<SweepTarget>) {
        let label = label.into();
        if targets.is_empty() {
            tracing::debug!(%label, "No targets, category dropped");
            return;
        }
        self.categories.push(CleanupCategory { label, targets });
    }

    /// Record a category that will not be swept.
    pub fn skip(&mut self, label: impl Into<String>, reason: impl Into<String>) {
        let skipped = SkippedCategory {
            label: label.into(),
            reason: reason.into(),
        };
        tracing::warn!(label = %skipped.label, reason = %skipped.reason, "Skipping category");
        self.skipped.push(skipped);
    }

    /// Add the system temp directories.
    pub fn with_temp(mut self, config: &SweepConfig) -> Self {
        self.add("Temporary Files", temp_targets(config));
        self
    }

    /// Add explicit directories, swept with the temp policy.
    pub fn with_paths(mut self, paths: &[PathBuf], config: &SweepConfig) -> Self {
        let targets = paths
            .iter()
            .map(|p| {
                SweepTarget::new(p)
                    .with_max_depth(config.max_depth)
                    .with_remove_empty_dirs(config.remove_empty_dirs)
            })
            .collect();
        self.add("Selected Paths", targets);
        self
    }

    /// Add one category per browser with caches under `base`.
    ///
    /// Running browsers are skipped unless `force` is set.
    pub fn with_browsers(
        mut self,
        registry: &BrowserRegistry,
        base: &Path,
        processes: &RunningProcesses,
        force: bool,
    ) -> Self {
        for browser in registry.browsers() {
            let targets = browser.sweep_targets(base);
            if targets.is_empty() {
                tracing::debug!(browser = browser.id(), "No cache directories found");
                continue;
            }

            if !force && browser.is_running(processes) {
                self.skip(
                    browser.display_name(),
                    "browser is running; close it first or use --force",
                );
                continue;
            }

            self.add(browser.display_name(), targets);
        }
        self
    }

    /// Root directories of every target, in plan order.
    pub fn roots(&self) -> Vec<PathBuf> {
        self.categories
            .iter()
            .flat_map(|c| c.targets.iter().map(|t| t.root_path.clone()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
