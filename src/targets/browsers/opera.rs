//! Opera cache locations.

use crate::targets::Browser;

#[cfg(windows)]
const CACHE_SUBPATHS: &[&str] = &[
    "Opera Software/Opera Stable/Cache",
    "Opera Software/Opera Stable/GPUCache",
];
#[cfg(target_os = "macos")]
const CACHE_SUBPATHS: &[&str] = &["com.operasoftware.Opera/Cache"];
#[cfg(not(any(windows, target_os = "macos")))]
const CACHE_SUBPATHS: &[&str] = &["opera/Cache"];

#[cfg(windows)]
const PROCESS_NAMES: &[&str] = &["opera.exe"];
#[cfg(not(windows))]
const PROCESS_NAMES: &[&str] = &["opera"];

pub struct Opera;

impl Browser for Opera {
    fn id(&self) -> &'static str {
        "opera"
    }

    fn display_name(&self) -> &'static str {
        "Opera"
    }

    fn process_names(&self) -> &'static [&'static str] {
        PROCESS_NAMES
    }

    fn cache_subpaths(&self) -> &'static [&'static str] {
        CACHE_SUBPATHS
    }
}
