use serde::Serialize;
use std::path::PathBuf;

/// Disk usage for the filesystem holding a path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskStatus {
    /// Path the figures were taken for (mount point or swept root)
    pub mount_point: PathBuf,

    /// Device name (e.g., "/dev/sda1"), when known
    pub device: Option<String>,

    /// Total capacity in bytes
    pub total: u64,

    /// Used space in bytes
    pub used: u64,

    /// Available space in bytes
    pub available: u64,

    /// Usage percentage (0.0 - 100.0)
    pub percent: f32,
}

impl DiskStatus {
    /// Human-readable used space
    pub fn used_human(&self) -> String {
        humansize::format_size(self.used, humansize::BINARY)
    }

    /// Human-readable total space
    pub fn total_human(&self) -> String {
        humansize::format_size(self.total, humansize::BINARY)
    }

    /// Human-readable available space
    pub fn available_human(&self) -> String {
        humansize::format_size(self.available, humansize::BINARY)
    }
}

/// Physical memory usage
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryStatus {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    /// Usage percentage (0.0 - 100.0)
    pub percent: f32,
}

impl MemoryStatus {
    pub fn new(total: u64, used: u64, available: u64) -> Self {
        let percent = if total > 0 {
            (used as f64 / total as f64 * 100.0) as f32
        } else {
            0.0
        };
        Self {
            total,
            used,
            available,
            percent,
        }
    }

    pub fn used_human(&self) -> String {
        humansize::format_size(self.used, humansize::BINARY)
    }

    pub fn total_human(&self) -> String {
        humansize::format_size(self.total, humansize::BINARY)
    }
}

/// Disk and memory figures at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemSnapshot {
    /// RFC 3339 local time
    pub captured_at: String,
    pub disks: Vec<DiskStatus>,
    pub memory: MemoryStatus,
}

impl SystemSnapshot {
    /// Available bytes summed over all disks in the snapshot.
    pub fn total_available(&self) -> u64 {
        self.disks.iter().map(|d| d.available).sum()
    }
}
