//! Google Chrome cache locations.

use crate::targets::Browser;

#[cfg(windows)]
const CACHE_SUBPATHS: &[&str] = &[
    "Google/Chrome/User Data/Default/Cache",
    "Google/Chrome/User Data/Default/Code Cache",
    "Google/Chrome/User Data/Default/GPUCache",
    "Google/Chrome/User Data/ShaderCache",
    "Google/Chrome/User Data/Default/Service Worker/CacheStorage",
];
#[cfg(target_os = "macos")]
const CACHE_SUBPATHS: &[&str] = &["Google/Chrome/Default/Cache", "Google/Chrome/Default/Code Cache"];
#[cfg(not(any(windows, target_os = "macos")))]
const CACHE_SUBPATHS: &[&str] = &["google-chrome/Default/Cache", "google-chrome/Default/Code Cache"];

#[cfg(windows)]
const PROCESS_NAMES: &[&str] = &["chrome.exe", "GoogleUpdate.exe"];
#[cfg(target_os = "macos")]
const PROCESS_NAMES: &[&str] = &["Google Chrome"];
#[cfg(not(any(windows, target_os = "macos")))]
const PROCESS_NAMES: &[&str] = &["chrome", "google-chrome"];

/// Chrome keeps HTTP, code and GPU caches under its default profile.
pub struct Chrome;

impl Browser for Chrome {
    fn id(&self) -> &'static str {
        "chrome"
    }

    fn display_name(&self) -> &'static str {
        "Google Chrome"
    }

    fn process_names(&self) -> &'static [&'static str] {
        PROCESS_NAMES
    }

    fn cache_subpaths(&self) -> &'static [&'static str] {
        CACHE_SUBPATHS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_chrome_properties() {
        assert_eq!(Chrome.id(), "chrome");
        assert_eq!(Chrome.display_name(), "Google Chrome");
        assert!(!Chrome.process_names().is_empty());
    }

    #[test]
    fn test_chrome_cache_dirs() {
        let tmp = TempDir::new().unwrap();
        for sub in Chrome.cache_subpaths() {
            fs::create_dir_all(tmp.path().join(sub)).unwrap();
        }

        let dirs = Chrome.cache_dirs(tmp.path());
        assert_eq!(dirs.len(), Chrome.cache_subpaths().len());
    }
}
