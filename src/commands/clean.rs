//! Clean command implementation.

use anyhow::Result;
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::build_plan;
use crate::cleanup::{CleanupOutcome, CleanupPlan, CleanupRunner, CleanupWorker};
use crate::cli::CleanArgs;
use crate::config::Config;
use crate::report::{CleanupReport, ReportFormat};
use crate::sweeper::{analyze_many, Sweeper};
use crate::system::SystemSnapshot;

/// Run the clean command.
pub fn run(args: CleanArgs, config: &Config, quiet: bool) -> Result<()> {
    let remove_empty_dirs = config.sweep.remove_empty_dirs && !args.keep_empty_dirs;
    let force = args.force || config.browsers.force;
    let plan = build_plan(&args.selection, config, remove_empty_dirs, force)?;
    let chatty = !quiet && !args.json;

    if plan.is_empty() {
        if chatty {
            println!("Nothing to clean.");
            print_skipped(&plan);
        }
        return Ok(());
    }

    if chatty {
        print_plan(&plan);
    }

    // Confirmation
    if !args.yes && !confirm(args.json)? {
        return Ok(());
    }

    let roots = plan.roots();
    let before = SystemSnapshot::capture(&roots);

    let sweeper = Sweeper::new().with_cancel_flag(cancel_flag());
    let skipped = plan.skipped.clone();
    let worker = CleanupWorker::spawn(CleanupRunner::new(sweeper), plan);

    let show_progress = chatty && !args.no_progress;
    let outcome = wait_for(worker, show_progress);

    let after = SystemSnapshot::capture(&roots);
    let report = CleanupReport::new(outcome, before, after, skipped, &config.system);

    if args.json {
        println!("{}", report.to_json()?);
    } else if !quiet {
        print_summary(&report);
    }

    if let Some((dir, format)) = report_destination(&args, config)? {
        let path = report.write_to(&dir, format)?;
        if chatty {
            println!("\nReport saved to {}", path.display());
        }
    }

    if report.summary.errors > 0 {
        std::process::exit(5); // Partial failure
    }

    Ok(())
}

/// Ask before deleting. With `--json` the prompt goes to stderr so stdout
/// stays a single JSON document.
fn confirm(json: bool) -> Result<bool> {
    let prompt = "\nProceed with cleanup? [y/N] ";
    if json {
        eprint!("{}", prompt);
        io::stderr().flush()?;
    } else {
        print!("{}", prompt);
        io::stdout().flush()?;
    }

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().eq_ignore_ascii_case("y") {
        return Ok(true);
    }
    if json {
        eprintln!("Aborted.");
    } else {
        println!("Aborted.");
    }
    Ok(false)
}

#[cfg(unix)]
fn cancel_flag() -> Arc<AtomicBool> {
    match crate::cleanup::install_cancel_handler() {
        Ok(flag) => flag,
        Err(e) => {
            tracing::warn!(error = %e, "Could not install signal handlers");
            Arc::new(AtomicBool::new(false))
        }
    }
}

#[cfg(not(unix))]
fn cancel_flag() -> Arc<AtomicBool> {
    Arc::new(AtomicBool::new(false))
}

fn wait_for(worker: CleanupWorker, show_progress: bool) -> CleanupOutcome {
    let pb = if show_progress {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcome = worker.wait(|percent, message| {
        pb.set_position(u64::from(percent));
        pb.set_message(message.to_string());
    });
    pb.finish_and_clear();

    outcome.unwrap_or_else(|| CleanupOutcome {
        cancelled: true,
        ..CleanupOutcome::default()
    })
}

fn report_destination(args: &CleanArgs, config: &Config) -> Result<Option<(PathBuf, ReportFormat)>> {
    let format: ReportFormat = config.report.format.parse()?;

    if let Some(dir) = &args.report {
        return Ok(Some((dir.clone(), format)));
    }
    if !config.report.enabled {
        return Ok(None);
    }

    let dir = config
        .report
        .directory
        .clone()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(Some((dir, format)))
}

fn print_plan(plan: &CleanupPlan) {
    println!("\n  {:<24} {:>8} {:>10} {:>12}", "CATEGORY", "TARGETS", "FILES", "SIZE");
    println!("  {}", "─".repeat(57));

    let mut total = 0u64;
    for category in &plan.categories {
        let estimate = analyze_many(&category.targets);
        total += estimate.bytes;
        println!(
            "  {:<24} {:>8} {:>10} {:>12}",
            category.label,
            category.targets.len(),
            estimate.files,
            estimate.bytes_human(),
        );
    }

    println!(
        "\nTotal: about {} in {} categor{}",
        format_size(total, BINARY),
        plan.categories.len(),
        if plan.categories.len() == 1 { "y" } else { "ies" }
    );
    print_skipped(plan);
}

fn print_skipped(plan: &CleanupPlan) {
    for skipped in &plan.skipped {
        println!("  Skipped {}: {}", skipped.label, skipped.reason);
    }
}

fn print_summary(report: &CleanupReport) {
    let s = &report.summary;

    println!("\nResults:");
    for category in &report.categories {
        println!(
            "  {:<24} {:>6} deleted {:>12} {:>6.1}%",
            category.label,
            category.stats.files_deleted,
            category.stats.freed_human(),
            category.success_rate
        );
    }
    println!();
    println!("  Deleted: {} of {} files", s.files_deleted, s.files_scanned);
    if s.dirs_removed > 0 {
        println!(
            "  Removed: {} empty director{}",
            s.dirs_removed,
            if s.dirs_removed == 1 { "y" } else { "ies" }
        );
    }
    if s.errors > 0 {
        println!("  Errors:  {}", s.errors);
    }
    println!("  Freed:   {}", format_size(s.bytes_freed, BINARY));
    println!("  Time:    {:.2}s", s.duration_secs);

    if s.cancelled {
        println!("\nCleanup was cancelled before finishing.");
    }

    println!("\nRecommendations:");
    for rec in &report.recommendations {
        println!("  - {}", rec);
    }
}
