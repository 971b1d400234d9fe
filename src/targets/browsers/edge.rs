//! Microsoft Edge cache locations.

use crate::targets::Browser;

#[cfg(windows)]
const CACHE_SUBPATHS: &[&str] = &[
    "Microsoft/Edge/User Data/Default/Cache",
    "Microsoft/Edge/User Data/Default/Code Cache",
    "Microsoft/Edge/User Data/Default/GPUCache",
    "Microsoft/Edge/User Data/Default/Service Worker/CacheStorage",
];
#[cfg(target_os = "macos")]
const CACHE_SUBPATHS: &[&str] = &["Microsoft Edge/Default/Cache", "Microsoft Edge/Default/Code Cache"];
#[cfg(not(any(windows, target_os = "macos")))]
const CACHE_SUBPATHS: &[&str] = &["microsoft-edge/Default/Cache", "microsoft-edge/Default/Code Cache"];

#[cfg(windows)]
const PROCESS_NAMES: &[&str] = &["msedge.exe", "MicrosoftEdgeUpdate.exe"];
#[cfg(target_os = "macos")]
const PROCESS_NAMES: &[&str] = &["Microsoft Edge"];
#[cfg(not(any(windows, target_os = "macos")))]
const PROCESS_NAMES: &[&str] = &["msedge", "microsoft-edge"];

pub struct Edge;

impl Browser for Edge {
    fn id(&self) -> &'static str {
        "edge"
    }

    fn display_name(&self) -> &'static str {
        "Microsoft Edge"
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

    #[test]
    fn test_edge_properties() {
        assert_eq!(Edge.id(), "edge");
        assert_eq!(Edge.display_name(), "Microsoft Edge");
        assert!(Edge.cache_subpaths().iter().all(|p| p.contains("Cache")));
    }
}
