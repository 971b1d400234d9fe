use std::path::PathBuf;

use super::disk::disks_for_paths;
use super::memory::memory_usage;
use super::types::SystemSnapshot;

impl SystemSnapshot {
    /// Capture disk usage for the filesystems holding `paths`, plus memory.
    pub fn capture(paths: &[PathBuf]) -> Self {
        Self {
            captured_at: chrono::Local::now().to_rfc3339(),
            disks: disks_for_paths(paths),
            memory: memory_usage(),
        }
    }
}
