//! Core trait for browser cache discovery.

use std::path::{Path, PathBuf};

use super::processes::RunningProcesses;
use crate::sweeper::SweepTarget;

/// A browser whose disk caches can be swept.
///
/// Paths are relative to the per-user local data base returned by
/// [`local_data_base`](super::local_data_base), so the same browser can be
/// pointed at a fake layout in tests.
pub trait Browser: Send + Sync {
    /// Unique identifier (e.g., "chrome").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g., "Google Chrome").
    fn display_name(&self) -> &'static str;

    /// Executable names that mean the browser is running.
    fn process_names(&self) -> &'static [&'static str];

    /// Cache directories relative to the local data base.
    fn cache_subpaths(&self) -> &'static [&'static str];

    /// Existing cache directories under `base`.
    fn cache_dirs(&self, base: &Path) -> Vec<PathBuf> {
        self.cache_subpaths()
            .iter()
            .map(|p| base.join(p))
            .filter(|p| p.is_dir())
            .collect()
    }

    /// Whether any of the browser's processes are running.
    fn is_running(&self, processes: &RunningProcesses) -> bool {
        processes.any_running(self.process_names())
    }

    /// One unbounded, empty-dir-removing target per existing cache directory.
    fn sweep_targets(&self, base: &Path) -> Vec<SweepTarget> {
        self.cache_dirs(base)
            .into_iter()
            .map(|dir| SweepTarget::new(dir).unbounded().with_remove_empty_dirs(true))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct MockBrowser;

    impl Browser for MockBrowser {
        fn id(&self) -> &'static str {
            "mock"
        }

        fn display_name(&self) -> &'static str {
            "Mock Browser"
        }

        fn process_names(&self) -> &'static [&'static str] {
            &["mockbrowser"]
        }

        fn cache_subpaths(&self) -> &'static [&'static str] {
            &["Mock/Cache", "Mock/GPUCache"]
        }
    }

    #[test]
    fn test_browser_trait_methods() {
        let browser = MockBrowser;

        assert_eq!(browser.id(), "mock");
        assert_eq!(browser.display_name(), "Mock Browser");
        assert_eq!(browser.process_names(), &["mockbrowser"]);
    }

    #[test]
    fn test_cache_dirs_only_existing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Mock/Cache")).unwrap();

        let dirs = MockBrowser.cache_dirs(tmp.path());

        assert_eq!(dirs.len(), 1);
        assert!(dirs[0].ends_with("Mock/Cache"));
    }

    #[test]
    fn test_cache_dirs_none_exist() {
        let tmp = TempDir::new().unwrap();
        assert!(MockBrowser.cache_dirs(tmp.path()).is_empty());
    }

    #[test]
    fn test_sweep_targets_policy() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Mock/GPUCache")).unwrap();

        let targets = MockBrowser.sweep_targets(tmp.path());

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].max_depth, None);
        assert!(targets[0].remove_empty_dirs);
    }

    #[test]
    fn test_is_running() {
        let running = RunningProcesses::from_names(["MockBrowser", "bash"]);
        assert!(MockBrowser.is_running(&running));
        assert!(!MockBrowser.is_running(&RunningProcesses::from_names(["bash"])));
    }
}
