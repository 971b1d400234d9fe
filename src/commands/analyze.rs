//! Analyze command implementation.

use anyhow::Result;
use humansize::{format_size, BINARY};
use serde::Serialize;

use super::build_plan;
use crate::cli::AnalyzeArgs;
use crate::cleanup::SkippedCategory;
use crate::config::Config;
use crate::sweeper::{analyze_many, SweepEstimate};

#[derive(Serialize)]
struct CategoryEstimate {
    label: String,
    #[serde(flatten)]
    estimate: SweepEstimate,
}

#[derive(Serialize)]
struct AnalysisOutput {
    categories: Vec<CategoryEstimate>,
    skipped: Vec<SkippedCategory>,
    total_files: u64,
    total_bytes: u64,
}

/// Run the analyze command.
pub fn run(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let plan = build_plan(
        &args.selection,
        config,
        config.sweep.remove_empty_dirs,
        config.browsers.force,
    )?;

    let categories: Vec<CategoryEstimate> = plan
        .categories
        .iter()
        .map(|c| CategoryEstimate {
            label: c.label.clone(),
            estimate: analyze_many(&c.targets),
        })
        .collect();

    let output = AnalysisOutput {
        total_files: categories.iter().map(|c| c.estimate.files).sum(),
        total_bytes: categories.iter().map(|c| c.estimate.bytes).sum(),
        categories,
        skipped: plan.skipped,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.categories.is_empty() {
        println!("Nothing to clean.");
    } else {
        println!("  {:<24} {:>10} {:>12}", "CATEGORY", "FILES", "SIZE");
        println!("  {}", "─".repeat(48));
        for c in &output.categories {
            println!(
                "  {:<24} {:>10} {:>12}",
                c.label,
                c.estimate.files,
                c.estimate.bytes_human()
            );
            for root in &c.estimate.unavailable_roots {
                println!("    unavailable: {}", root.display());
            }
        }
        println!(
            "\nTotal: {} in {} file{}",
            format_size(output.total_bytes, BINARY),
            output.total_files,
            if output.total_files == 1 { "" } else { "s" }
        );
    }

    for skipped in &output.skipped {
        println!("  Skipped {}: {}", skipped.label, skipped.reason);
    }

    Ok(())
}
