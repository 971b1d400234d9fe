use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::types::DiskStatus;
use crate::error::{Result, SweeperError};

/// Check disk usage for the filesystem holding `path`
#[cfg(unix)]
pub fn check_disk_usage(path: &Path) -> Result<DiskStatus> {
    use nix::sys::statvfs::statvfs;

    let stat = statvfs(path).map_err(|errno| SweeperError::io(path, errno.into()))?;

    let block_size = stat.fragment_size() as u64;
    let total = stat.blocks() as u64 * block_size;
    let available = stat.blocks_available() as u64 * block_size;
    let free = stat.blocks_free() as u64 * block_size;

    // Used = total - free (not available, as available excludes reserved blocks)
    let used = total.saturating_sub(free);

    // Percent is based on non-reserved space (what users can actually use)
    let usable_total = used + available;
    let percent = if usable_total > 0 {
        (used as f64 / usable_total as f64 * 100.0) as f32
    } else {
        0.0
    };

    Ok(DiskStatus {
        mount_point: path.to_path_buf(),
        device: None,
        total,
        used,
        available,
        percent,
    })
}

/// Check disk usage for the disk whose mount point is the longest prefix of `path`
#[cfg(not(unix))]
pub fn check_disk_usage(path: &Path) -> Result<DiskStatus> {
    let path = path
        .canonicalize()
        .map_err(|e| SweeperError::io(path, e))?;

    sysinfo_disks()
        .into_iter()
        .filter(|d| path.starts_with(&d.mount_point))
        .max_by_key(|d| d.mount_point.as_os_str().len())
        .ok_or_else(|| SweeperError::PathNotFound(path.clone()))
}

fn sysinfo_disks() -> Vec<DiskStatus> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    disks
        .list()
        .iter()
        .map(|disk| {
            let total = disk.total_space();
            let available = disk.available_space();
            let used = total.saturating_sub(available);
            let percent = if total > 0 {
                (used as f64 / total as f64 * 100.0) as f32
            } else {
                0.0
            };
            DiskStatus {
                mount_point: disk.mount_point().to_path_buf(),
                device: Some(disk.name().to_string_lossy().into_owned()),
                total,
                used,
                available,
                percent,
            }
        })
        .collect()
}

/// Information about a mount point
#[derive(Debug, Clone)]
pub struct MountPoint {
    pub device: String,
    pub path: PathBuf,
    pub fs_type: String,
}

/// Parse `/proc/mounts` content into real (non-virtual) mount points
pub fn parse_mounts(content: &str) -> Vec<MountPoint> {
    content
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let device = parts.next()?;
            let mount_point = parts.next()?;
            let fs_type = parts.next()?;

            if is_virtual_filesystem(fs_type, device, mount_point) {
                return None;
            }

            Some(MountPoint {
                device: device.to_string(),
                // Spaces in mount points are written as \040
                path: PathBuf::from(mount_point.replace("\\040", " ")),
                fs_type: fs_type.to_string(),
            })
        })
        .collect()
}

/// Check if a filesystem type is virtual (not real disk)
fn is_virtual_filesystem(fs_type: &str, device: &str, mount_point: &str) -> bool {
    const VIRTUAL_FS: &[&str] = &[
        "proc",
        "sysfs",
        "devtmpfs",
        "devpts",
        "tmpfs",
        "securityfs",
        "cgroup",
        "cgroup2",
        "pstore",
        "debugfs",
        "hugetlbfs",
        "mqueue",
        "fusectl",
        "configfs",
        "binfmt_misc",
        "autofs",
        "efivarfs",
        "tracefs",
        "bpf",
        "overlay",
        "squashfs",
        "nsfs",
        "ramfs",
    ];

    if VIRTUAL_FS.contains(&fs_type) {
        return true;
    }

    if mount_point.starts_with("/snap/") || mount_point.starts_with("/var/lib/docker/") {
        return true;
    }

    // Virtual devices don't start with /; network mounts contain ':'
    !device.starts_with('/') && device != "none" && !device.contains(':')
}

/// Usage of every real mounted disk.
///
/// Reads `/proc/mounts` on Linux and asks the OS disk list elsewhere.
pub fn mounted_disks() -> Result<Vec<DiskStatus>> {
    if !cfg!(target_os = "linux") {
        return Ok(sysinfo_disks());
    }

    let content = std::fs::read_to_string("/proc/mounts")
        .map_err(|e| SweeperError::io("/proc/mounts", e))?;

    let mut results = Vec::new();
    for mount in parse_mounts(&content) {
        match check_disk_usage(&mount.path) {
            Ok(mut status) => {
                status.device = Some(mount.device);
                results.push(status);
            }
            Err(e) => {
                tracing::warn!("Failed to check mount point {}: {}", mount.path.display(), e);
            }
        }
    }

    Ok(results)
}

/// Usage for the filesystems holding `paths`, one entry per filesystem.
///
/// Paths that cannot be checked are logged and skipped.
pub fn disks_for_paths(paths: &[PathBuf]) -> Vec<DiskStatus> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for path in paths {
        let Some(key) = filesystem_key(path) else {
            continue;
        };
        if !seen.insert(key) {
            continue;
        }

        match check_disk_usage(path) {
            Ok(status) => results.push(status),
            Err(e) => tracing::warn!("Failed to check disk usage for {}: {}", path.display(), e),
        }
    }

    results
}

#[cfg(unix)]
fn filesystem_key(path: &Path) -> Option<String> {
    use std::os::unix::fs::MetadataExt;
    std::fs::metadata(path).ok().map(|m| m.dev().to_string())
}

#[cfg(not(unix))]
fn filesystem_key(path: &Path) -> Option<String> {
    check_disk_usage(path)
        .ok()
        .map(|d| d.mount_point.to_string_lossy().into_owned())
}
