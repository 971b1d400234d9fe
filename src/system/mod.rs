//! Disk and memory usage, reported around a cleanup.

mod disk;
mod memory;
mod snapshot;
mod types;

pub use disk::{check_disk_usage, disks_for_paths, mounted_disks, parse_mounts, MountPoint};
pub use memory::memory_usage;
pub use types::{DiskStatus, MemoryStatus, SystemSnapshot};
