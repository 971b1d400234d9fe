use std::path::{Path, PathBuf};

/// A directory to sweep plus the policy for sweeping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepTarget {
    /// Directory whose contents are swept. Never removed itself.
    pub root_path: PathBuf,

    /// Maximum recursion depth (None = unlimited).
    ///
    /// Depth 0 is the direct children of the root: with `Some(0)` files in the
    /// root are processed but subdirectories are left alone.
    pub max_depth: Option<usize>,

    /// Remove directories that the sweep leaves empty.
    pub remove_empty_dirs: bool,
}

impl SweepTarget {
    /// Create a target with unlimited depth that keeps empty directories.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            max_depth: None,
            remove_empty_dirs: false,
        }
    }

    /// Set maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Remove any depth limit
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Set whether emptied directories are removed
    pub fn with_remove_empty_dirs(mut self, remove: bool) -> Self {
        self.remove_empty_dirs = remove;
        self
    }

    /// Whether a directory found at `depth` may be descended into.
    pub fn may_descend(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }

    /// Key used to recognise two targets pointing at the same directory.
    ///
    /// Falls back to the literal path when the root cannot be resolved, so
    /// missing roots still dedup against identical spellings.
    pub fn resolved_root(&self) -> PathBuf {
        self.root_path
            .canonicalize()
            .unwrap_or_else(|_| self.root_path.clone())
    }
}

/// A filesystem entry seen during a sweep or an analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub is_directory: bool,
}

impl FileCandidate {
    pub fn file(path: &Path, size_bytes: u64) -> Self {
        Self {
            path: path.to_path_buf(),
            size_bytes,
            is_directory: false,
        }
    }

    pub fn directory(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            size_bytes: 0,
            is_directory: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_target() {
        let target = SweepTarget::new("/tmp/x");
        assert_eq!(target.root_path, PathBuf::from("/tmp/x"));
        assert_eq!(target.max_depth, None);
        assert!(!target.remove_empty_dirs);
    }

    #[test]
    fn test_target_builder() {
        let target = SweepTarget::new("/tmp/x")
            .with_max_depth(3)
            .with_remove_empty_dirs(true);

        assert_eq!(target.max_depth, Some(3));
        assert!(target.remove_empty_dirs);
        assert_eq!(target.unbounded().max_depth, None);
    }

    #[test]
    fn test_may_descend() {
        let target = SweepTarget::new("/x").with_max_depth(2);
        assert!(target.may_descend(0));
        assert!(target.may_descend(1));
        assert!(!target.may_descend(2));

        let flat = SweepTarget::new("/x").with_max_depth(0);
        assert!(!flat.may_descend(0));

        let unbounded = SweepTarget::new("/x");
        assert!(unbounded.may_descend(1000));
    }

    #[test]
    fn test_resolved_root_canonicalizes() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        std::fs::create_dir(&sub).unwrap();

        let direct = SweepTarget::new(&sub);
        let dotted = SweepTarget::new(sub.join("..").join("sub"));
        assert_eq!(direct.resolved_root(), dotted.resolved_root());
    }

    #[test]
    fn test_resolved_root_missing_path() {
        let target = SweepTarget::new("/definitely/not/here");
        assert_eq!(target.resolved_root(), PathBuf::from("/definitely/not/here"));
    }

    #[test]
    fn test_candidate_constructors() {
        let file = FileCandidate::file(Path::new("/a"), 10);
        assert!(!file.is_directory);
        assert_eq!(file.size_bytes, 10);

        let dir = FileCandidate::directory(Path::new("/b"));
        assert!(dir.is_directory);
        assert_eq!(dir.size_bytes, 0);
    }
}
