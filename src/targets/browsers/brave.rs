//! Brave cache locations.

use crate::targets::Browser;

#[cfg(windows)]
const CACHE_SUBPATHS: &[&str] = &[
    "BraveSoftware/Brave-Browser/User Data/Default/Cache",
    "BraveSoftware/Brave-Browser/User Data/Default/Code Cache",
    "BraveSoftware/Brave-Browser/User Data/Default/GPUCache",
];
#[cfg(not(windows))]
const CACHE_SUBPATHS: &[&str] = &[
    "BraveSoftware/Brave-Browser/Default/Cache",
    "BraveSoftware/Brave-Browser/Default/Code Cache",
];

#[cfg(windows)]
const PROCESS_NAMES: &[&str] = &["brave.exe"];
#[cfg(target_os = "macos")]
const PROCESS_NAMES: &[&str] = &["Brave Browser"];
#[cfg(not(any(windows, target_os = "macos")))]
const PROCESS_NAMES: &[&str] = &["brave", "brave-browser"];

pub struct Brave;

impl Browser for Brave {
    fn id(&self) -> &'static str {
        "brave"
    }

    fn display_name(&self) -> &'static str {
        "Brave"
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
    fn test_brave_partial_layout() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(CACHE_SUBPATHS[0])).unwrap();

        let targets = Brave.sweep_targets(tmp.path());
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].root_path, tmp.path().join(CACHE_SUBPATHS[0]));
    }
}
