//! Runs a cleanup plan category by category.

use serde::Serialize;
use std::time::Instant;

use super::plan::CleanupPlan;
use crate::sweeper::{Progress, Span, SweepStats, Sweeper};

/// Result of sweeping one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub label: String,
    pub stats: SweepStats,
    pub duration_secs: f64,
    /// Deleted / scanned, in percent
    pub success_rate: f64,
}

/// Result of running a whole plan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupOutcome {
    pub results: Vec<CategoryResult>,
    pub duration_secs: f64,
    pub cancelled: bool,
}

impl CleanupOutcome {
    /// All category counters summed.
    pub fn totals(&self) -> SweepStats {
        self.results.iter().map(|r| r.stats.clone()).sum()
    }

    /// Mean of the per-category success rates (0 with no categories).
    pub fn average_success_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.results.iter().map(|r| r.success_rate).sum::<f64>() / self.results.len() as f64
    }
}

/// Sweeps each category of a plan in order with one `Sweeper`.
pub struct CleanupRunner {
    sweeper: Sweeper,
}

impl CleanupRunner {
    pub fn new(sweeper: Sweeper) -> Self {
        Self { sweeper }
    }

    /// Run `plan` without progress reporting.
    pub fn run(&self, plan: &CleanupPlan) -> CleanupOutcome {
        self.run_with_progress(plan, &mut |_, _| {})
    }

    /// Run `plan`, splitting the progress range evenly across categories.
    pub fn run_with_progress(
        &self,
        plan: &CleanupPlan,
        on_progress: &mut dyn FnMut(u8, &str),
    ) -> CleanupOutcome {
        let started = Instant::now();
        let mut progress = Progress::new(on_progress);
        let mut outcome = CleanupOutcome::default();
        let count = plan.categories.len();

        for (i, category) in plan.categories.iter().enumerate() {
            let span = Span::FULL.part(i, count);
            progress.report(span.at(0, 1), &format!("Cleaning {}...", category.label));
            tracing::info!(category = %category.label, targets = category.targets.len(), "Cleaning category");

            let category_started = Instant::now();
            let stats = self.sweeper.sweep_many_in(&category.targets, &mut progress, span);
            let cancelled = stats.cancelled;

            outcome.results.push(CategoryResult {
                label: category.label.clone(),
                success_rate: stats.success_rate(),
                duration_secs: category_started.elapsed().as_secs_f64(),
                stats,
            });

            if cancelled {
                tracing::warn!(category = %category.label, "Cleanup cancelled");
                outcome.cancelled = true;
                break;
            }
        }

        outcome.duration_secs = started.elapsed().as_secs_f64();
        let message = if outcome.cancelled {
            "Cleanup cancelled"
        } else {
            "Cleanup completed"
        };
        progress.report(100, message);

        outcome
    }
}
