//! Firefox cache locations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::targets::Browser;

#[cfg(windows)]
const PROFILES_ROOT: &str = "Mozilla/Firefox/Profiles";
#[cfg(target_os = "macos")]
const PROFILES_ROOT: &str = "Firefox/Profiles";
#[cfg(not(any(windows, target_os = "macos")))]
const PROFILES_ROOT: &str = "mozilla/firefox";

#[cfg(windows)]
const PROCESS_NAMES: &[&str] = &["firefox.exe"];
#[cfg(not(windows))]
const PROCESS_NAMES: &[&str] = &["firefox", "firefox-bin"];

/// Firefox keeps one `cache2` directory per profile, so the cache
/// directories are discovered rather than listed.
pub struct Firefox;

impl Browser for Firefox {
    fn id(&self) -> &'static str {
        "firefox"
    }

    fn display_name(&self) -> &'static str {
        "Mozilla Firefox"
    }

    fn process_names(&self) -> &'static [&'static str] {
        PROCESS_NAMES
    }

    fn cache_subpaths(&self) -> &'static [&'static str] {
        &[PROFILES_ROOT]
    }

    fn cache_dirs(&self, base: &Path) -> Vec<PathBuf> {
        let Ok(read_dir) = fs::read_dir(base.join(PROFILES_ROOT)) else {
            return vec![];
        };

        let mut dirs: Vec<PathBuf> = read_dir
            .filter_map(|e| e.ok())
            .map(|e| e.path().join("cache2"))
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_firefox_discovers_profiles() {
        let tmp = TempDir::new().unwrap();
        let profiles = tmp.path().join(PROFILES_ROOT);
        fs::create_dir_all(profiles.join("abc.default-release/cache2/entries")).unwrap();
        fs::create_dir_all(profiles.join("xyz.dev/cache2")).unwrap();
        fs::create_dir_all(profiles.join("no-cache.profile")).unwrap();

        let dirs = Firefox.cache_dirs(tmp.path());

        assert_eq!(dirs.len(), 2);
        assert!(dirs.iter().all(|d| d.ends_with("cache2")));
    }

    #[test]
    fn test_firefox_without_profiles() {
        let tmp = TempDir::new().unwrap();
        assert!(Firefox.cache_dirs(tmp.path()).is_empty());
    }
}
