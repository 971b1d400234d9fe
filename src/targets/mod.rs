//! Discovery of directories worth sweeping: system temp folders and
//! per-browser caches.

mod browser;
pub mod browsers;
mod processes;
mod registry;
mod temp;

pub use browser::Browser;
pub use processes::RunningProcesses;
pub use registry::BrowserRegistry;
pub use temp::{temp_dirs, temp_targets};

use std::path::PathBuf;

/// Per-user base directory that browser cache paths are relative to.
///
/// `AppData\Local` on Windows, the user cache directory elsewhere.
pub fn local_data_base() -> Option<PathBuf> {
    if cfg!(windows) {
        dirs::data_local_dir()
    } else {
        dirs::cache_dir()
    }
}
