//! Subcommand implementations.

pub mod analyze;
pub mod clean;
pub mod status;

use anyhow::{bail, Result};

use crate::cleanup::CleanupPlan;
use crate::cli::SelectionArgs;
use crate::config::{Config, SweepConfig};
use crate::targets::{local_data_base, BrowserRegistry, RunningProcesses};

/// Build the cleanup plan for a run from config plus CLI selection.
///
/// Explicit paths replace the default temp and browser locations.
pub(crate) fn build_plan(
    selection: &SelectionArgs,
    config: &Config,
    remove_empty_dirs: bool,
    force: bool,
) -> Result<CleanupPlan> {
    let sweep = SweepConfig {
        max_depth: selection.max_depth.unwrap_or(config.sweep.max_depth),
        remove_empty_dirs,
        extra_temp_dirs: config.sweep.extra_temp_dirs.clone(),
    };

    if !selection.paths.is_empty() {
        return Ok(CleanupPlan::new().with_paths(&selection.paths, &sweep));
    }

    let mut plan = CleanupPlan::new();
    if !selection.no_temp {
        plan = plan.with_temp(&sweep);
    }

    if !selection.no_browsers {
        let registry = browser_registry(selection, config)?;
        match local_data_base() {
            Some(base) if !registry.is_empty() => {
                let processes = if force {
                    RunningProcesses::default()
                } else {
                    RunningProcesses::snapshot()
                };
                plan = plan.with_browsers(&registry, &base, &processes, force);
            }
            Some(_) => {}
            None => tracing::warn!("No local data directory; browser caches skipped"),
        }
    }

    Ok(plan)
}

fn browser_registry(selection: &SelectionArgs, config: &Config) -> Result<BrowserRegistry> {
    let Some(requested) = &selection.browsers else {
        return Ok(BrowserRegistry::with_ids(&config.browsers.enabled));
    };

    let all = BrowserRegistry::new();
    let unknown: Vec<&str> = requested
        .iter()
        .map(|s| s.as_str())
        .filter(|id| all.get(id).is_none())
        .collect();
    if !unknown.is_empty() {
        bail!(
            "unknown browser(s): {} (valid: {})",
            unknown.join(", "),
            all.ids().join(", ")
        );
    }

    Ok(BrowserRegistry::with_ids(requested))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn explicit_paths_replace_defaults() {
        let selection = SelectionArgs {
            paths: vec![PathBuf::from("/some/dir")],
            max_depth: Some(1),
            ..SelectionArgs::default()
        };
        let plan = build_plan(&selection, &Config::default(), false, false).unwrap();

        assert_eq!(plan.categories.len(), 1);
        assert_eq!(plan.categories[0].label, "Selected Paths");
        let target = &plan.categories[0].targets[0];
        assert_eq!(target.max_depth, Some(1));
        assert!(!target.remove_empty_dirs);
    }

    #[test]
    fn nothing_selected_gives_empty_plan() {
        let selection = SelectionArgs {
            no_temp: true,
            no_browsers: true,
            ..SelectionArgs::default()
        };
        let plan = build_plan(&selection, &Config::default(), true, false).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn unknown_browser_is_rejected() {
        let selection = SelectionArgs {
            no_temp: true,
            browsers: Some(vec!["netscape".to_string()]),
            ..SelectionArgs::default()
        };
        let err = build_plan(&selection, &Config::default(), true, true).unwrap_err();
        assert!(err.to_string().contains("netscape"));
    }
}
