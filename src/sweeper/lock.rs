//! "Is this file in use?" probes.
//!
//! None of these are definitive. The portable check renames a file onto
//! itself, which fails on Windows while another process holds the file open
//! without delete sharing. Elsewhere that rename usually succeeds, so each
//! platform adds its own check on top. A permission problem on an unlocked
//! file also reads as "locked"; callers count both the same way.

use std::fs;
use std::path::Path;

/// Capability to decide whether a file should be left alone because another
/// process is using it.
pub trait LockProbe: Send + Sync {
    /// Returns true if the file looks held open or is inaccessible.
    ///
    /// The path should exist; a missing path reads as locked.
    fn is_locked(&self, path: &Path) -> bool;
}

/// Rename-in-place heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameProbe;

impl LockProbe for RenameProbe {
    fn is_locked(&self, path: &Path) -> bool {
        fs::rename(path, path).is_err()
    }
}

/// Rename heuristic plus a non-blocking exclusive `flock`.
///
/// Detects files another process holds an advisory lock on. Opening uses
/// `O_NONBLOCK` so a FIFO that slipped in cannot hang the sweep.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryLockProbe;

#[cfg(unix)]
impl LockProbe for AdvisoryLockProbe {
    fn is_locked(&self, path: &Path) -> bool {
        use nix::fcntl::{Flock, FlockArg, OFlag};
        use std::os::unix::fs::OpenOptionsExt;

        if RenameProbe.is_locked(path) {
            return true;
        }

        let file = match fs::OpenOptions::new()
            .read(true)
            .custom_flags(OFlag::O_NONBLOCK.bits())
            .open(path)
        {
            Ok(f) => f,
            Err(_) => return true,
        };

        // The guard unlocks on drop.
        match Flock::lock(file, FlockArg::LockExclusiveNonblock) {
            Ok(_guard) => false,
            Err((_, errno)) => {
                tracing::trace!(path = %path.display(), %errno, "flock refused");
                true
            }
        }
    }
}

/// Rename heuristic plus an open with no sharing allowed.
///
/// The open fails with a sharing violation while any other handle is open.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ShareModeProbe;

#[cfg(windows)]
impl LockProbe for ShareModeProbe {
    fn is_locked(&self, path: &Path) -> bool {
        use std::os::windows::fs::OpenOptionsExt;

        if RenameProbe.is_locked(path) {
            return true;
        }

        fs::OpenOptions::new()
            .read(true)
            .share_mode(0)
            .open(path)
            .is_err()
    }
}

#[cfg(unix)]
pub type PlatformProbe = AdvisoryLockProbe;

#[cfg(windows)]
pub type PlatformProbe = ShareModeProbe;

#[cfg(not(any(unix, windows)))]
pub type PlatformProbe = RenameProbe;

/// The probe best suited to the current platform.
pub fn default_probe() -> Box<dyn LockProbe> {
    Box::new(PlatformProbe::default())
}

/// Check a file with the platform probe.
pub fn is_locked(path: &Path) -> bool {
    PlatformProbe::default().is_locked(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unlocked_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("free.txt");
        fs::write(&path, "data").unwrap();

        assert!(!is_locked(&path));
        assert!(!RenameProbe.is_locked(&path));
        // Probing must not disturb the file
        assert_eq!(fs::read_to_string(&path).unwrap(), "data");
    }

    #[test]
    fn test_missing_file_reads_as_locked() {
        let tmp = TempDir::new().unwrap();
        assert!(RenameProbe.is_locked(&tmp.path().join("nope")));
    }

    #[cfg(unix)]
    #[test]
    fn test_flocked_file_is_locked() {
        use nix::fcntl::{Flock, FlockArg};

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("held.lock");
        fs::write(&path, "busy").unwrap();

        let handle = fs::File::open(&path).unwrap();
        let guard = Flock::lock(handle, FlockArg::LockExclusive).unwrap();

        assert!(AdvisoryLockProbe.is_locked(&path));

        drop(guard);
        assert!(!AdvisoryLockProbe.is_locked(&path));
    }

    #[cfg(windows)]
    #[test]
    fn test_open_handle_is_locked() {
        use std::os::windows::fs::OpenOptionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("held.txt");
        fs::write(&path, "busy").unwrap();

        let handle = fs::OpenOptions::new()
            .read(true)
            .share_mode(0)
            .open(&path)
            .unwrap();
        assert!(is_locked(&path));

        drop(handle);
        assert!(!is_locked(&path));
    }
}
