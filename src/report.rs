//! Post-cleanup report: summary figures, system state before and after,
//! and recommendations.

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cleanup::{CategoryResult, CleanupOutcome, SkippedCategory};
use crate::config::SystemConfig;
use crate::error::{ConfigError, Result, SweeperError};
use crate::system::SystemSnapshot;

/// Output format for a written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "report format must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

/// Totals across all categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSummary {
    pub files_deleted: u64,
    pub files_scanned: u64,
    pub bytes_freed: u64,
    pub dirs_removed: u64,
    pub errors: u64,
    pub duration_secs: f64,
    /// Change in available disk space (after minus before); may be negative
    /// when other processes wrote meanwhile.
    pub disk_free_delta: i64,
    pub average_success_rate: f64,
    pub cancelled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanupReport {
    pub generated_at: String,
    pub summary: ReportSummary,
    pub categories: Vec<CategoryResult>,
    pub skipped: Vec<SkippedCategory>,
    pub unavailable_roots: Vec<PathBuf>,
    pub before: SystemSnapshot,
    pub after: SystemSnapshot,
    pub recommendations: Vec<String>,
}

impl CleanupReport {
    /// Build a report, judging disk and memory against `thresholds`.
    pub fn new(
        outcome: CleanupOutcome,
        before: SystemSnapshot,
        after: SystemSnapshot,
        skipped: Vec<SkippedCategory>,
        thresholds: &SystemConfig,
    ) -> Self {
        let totals = outcome.totals();
        let summary = ReportSummary {
            files_deleted: totals.files_deleted,
            files_scanned: totals.files_scanned,
            bytes_freed: totals.bytes_freed,
            dirs_removed: totals.dirs_removed,
            errors: totals.errors,
            duration_secs: outcome.duration_secs,
            disk_free_delta: after.total_available() as i64 - before.total_available() as i64,
            average_success_rate: outcome.average_success_rate(),
            cancelled: outcome.cancelled,
        };

        let mut report = Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            summary,
            categories: outcome.results,
            skipped,
            unavailable_roots: totals.unavailable_roots,
            before,
            after,
            recommendations: Vec::new(),
        };
        report.recommendations = report.recommend(thresholds);
        report
    }

    fn recommend(&self, thresholds: &SystemConfig) -> Vec<String> {
        let mut recs = Vec::new();

        for disk in &self.after.disks {
            if disk.percent > f32::from(thresholds.disk_warn_percent) {
                recs.push(format!(
                    "Disk {} is {:.1}% full; consider removing large files or moving data elsewhere",
                    disk.mount_point.display(),
                    disk.percent
                ));
            }
        }

        if self.after.memory.percent > f32::from(thresholds.memory_warn_percent) {
            recs.push(format!(
                "Memory usage is {:.1}%; consider closing unused applications",
                self.after.memory.percent
            ));
        }

        if self.summary.errors > 0 {
            recs.push(format!(
                "{} item(s) could not be deleted; they may be in use or need elevated permissions",
                self.summary.errors
            ));
        }

        if !self.unavailable_roots.is_empty() {
            recs.push(format!(
                "{} location(s) could not be read and were skipped",
                self.unavailable_roots.len()
            ));
        }

        for skipped in &self.skipped {
            recs.push(format!("{} was skipped: {}", skipped.label, skipped.reason));
        }

        if self.summary.cancelled {
            recs.push("Cleanup was cancelled; run it again to finish".to_string());
        }

        if recs.is_empty() {
            recs.push("System is well maintained; no further action needed".to_string());
        }

        recs
    }

    /// Plain-text rendering.
    pub fn render_text(&self) -> String {
        let s = &self.summary;
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "TEMP SWEEPER CLEANUP REPORT");
        let _ = writeln!(out, "Generated: {}", self.generated_at);
        let _ = writeln!(out);

        let _ = writeln!(out, "SUMMARY");
        let _ = writeln!(out, "  Files deleted:   {} of {} scanned", s.files_deleted, s.files_scanned);
        let _ = writeln!(out, "  Space freed:     {}", format_size(s.bytes_freed));
        let _ = writeln!(out, "  Dirs removed:    {}", s.dirs_removed);
        let _ = writeln!(out, "  Errors:          {}", s.errors);
        let _ = writeln!(out, "  Duration:        {:.2}s", s.duration_secs);
        let _ = writeln!(out, "  Disk free delta: {}", format_delta(s.disk_free_delta));
        let _ = writeln!(out, "  Success rate:    {:.1}%", s.average_success_rate);
        if s.cancelled {
            let _ = writeln!(out, "  Status:          cancelled");
        }

        if !self.categories.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "CATEGORIES");
            for c in &self.categories {
                let _ = writeln!(
                    out,
                    "  {:<20} {:>6} files {:>12} {:>4} errors {:>6.1}% {:>7.2}s",
                    c.label,
                    c.stats.files_deleted,
                    format_size(c.stats.bytes_freed),
                    c.stats.errors,
                    c.success_rate,
                    c.duration_secs
                );
            }
        }

        if !self.skipped.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "SKIPPED");
            for skipped in &self.skipped {
                let _ = writeln!(out, "  {}: {}", skipped.label, skipped.reason);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "SYSTEM");
        for (before, after) in self.before.disks.iter().zip(&self.after.disks) {
            let _ = writeln!(
                out,
                "  Disk {}: {:.1}% -> {:.1}% used ({} available)",
                after.mount_point.display(),
                before.percent,
                after.percent,
                after.available_human()
            );
        }
        let _ = writeln!(
            out,
            "  Memory: {:.1}% used ({} of {})",
            self.after.memory.percent,
            self.after.memory.used_human(),
            self.after.memory.total_human()
        );

        let _ = writeln!(out);
        let _ = writeln!(out, "RECOMMENDATIONS");
        for rec in &self.recommendations {
            let _ = writeln!(out, "  - {}", rec);
        }

        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report into `dir` as `cleanup_report_YYYYmmdd_HHMMSS.<ext>`.
    pub fn write_to(&self, dir: &Path, format: ReportFormat) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| SweeperError::io(dir, e))?;

        let name = format!(
            "cleanup_report_{}.{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S"),
            format.extension()
        );
        let path = dir.join(name);

        let content = match format {
            ReportFormat::Text => self.render_text(),
            ReportFormat::Json => self.to_json()?,
        };
        fs::write(&path, content).map_err(|e| SweeperError::io(&path, e))?;

        tracing::info!(path = %path.display(), "Wrote cleanup report");
        Ok(path)
    }
}

fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

fn format_delta(delta: i64) -> String {
    let sign = if delta < 0 { "-" } else { "+" };
    format!("{}{}", sign, format_size(delta.unsigned_abs()))
}
