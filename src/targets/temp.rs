//! Well-known temporary directories.

use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use crate::config::SweepConfig;
use crate::sweeper::SweepTarget;

/// Environment variables that may name a temp directory.
const TEMP_VARS: &[&str] = &["TEMP", "TMP", "TMPDIR"];

/// Candidate temp directories for this platform, before filtering.
fn candidates() -> Vec<PathBuf> {
    let mut found = vec![env::temp_dir()];

    for var in TEMP_VARS {
        if let Some(value) = env::var_os(var) {
            if !value.is_empty() {
                found.push(PathBuf::from(value));
            }
        }
    }

    #[cfg(windows)]
    {
        found.push(PathBuf::from(r"C:\Windows\Temp"));
        if let Some(local) = dirs::data_local_dir() {
            found.push(local.join("Temp"));
        }
    }

    found
}

/// Existing temp directories plus `extra`, deduplicated by resolved path.
pub fn temp_dirs(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();

    candidates()
        .into_iter()
        .chain(extra.iter().cloned())
        .filter(|p| p.is_dir())
        .filter(|p| seen.insert(p.canonicalize().unwrap_or_else(|_| p.clone())))
        .collect()
}

/// Sweep targets for every temp directory.
pub fn temp_targets(config: &SweepConfig) -> Vec<SweepTarget> {
    temp_dirs(&config.extra_temp_dirs)
        .into_iter()
        .map(|dir| {
            SweepTarget::new(dir)
                .with_max_depth(config.max_depth)
                .with_remove_empty_dirs(config.remove_empty_dirs)
        })
        .collect()
}
