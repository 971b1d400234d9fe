use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum SweeperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SweeperError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SweeperError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Why a single entry could not be swept.
///
/// None of these abort a sweep; they only decide which counter moves and how
/// loudly the failure is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepErrorKind {
    /// Permission denied while reading or deleting.
    AccessDenied,
    /// The file looks held open by another process.
    Locked,
    /// The entry disappeared before we got to it.
    NotFound,
    /// The sweep root is missing, not a directory, or unreadable.
    RootUnavailable,
    /// Any other OS error.
    Other,
}

impl SweepErrorKind {
    /// Classify an OS error raised while touching an entry.
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SweepErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => SweepErrorKind::AccessDenied,
            _ => SweepErrorKind::Other,
        }
    }

    /// Whether this outcome should be counted in `SweepStats::errors`.
    pub fn is_counted(self) -> bool {
        !matches!(self, SweepErrorKind::NotFound)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SweeperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("disk_warn_percent must be 1-100".into());
        assert!(err.to_string().contains("disk_warn_percent"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let sweeper_err: SweeperError = config_err.into();
        assert!(matches!(sweeper_err, SweeperError::Config(_)));
    }

    #[test]
    fn io_error_includes_path() {
        let err = SweeperError::io("/tmp/x", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("/tmp/x"));
    }

    #[test]
    fn classify_io_errors() {
        let not_found = io::Error::from(io::ErrorKind::NotFound);
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let other = io::Error::new(io::ErrorKind::Other, "boom");

        assert_eq!(SweepErrorKind::classify(&not_found), SweepErrorKind::NotFound);
        assert_eq!(SweepErrorKind::classify(&denied), SweepErrorKind::AccessDenied);
        assert_eq!(SweepErrorKind::classify(&other), SweepErrorKind::Other);
    }

    #[test]
    fn not_found_is_not_counted() {
        assert!(!SweepErrorKind::NotFound.is_counted());
        assert!(SweepErrorKind::Locked.is_counted());
        assert!(SweepErrorKind::AccessDenied.is_counted());
    }
}
