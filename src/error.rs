//! Scan error types.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Error type for scan and extraction operations.
///
/// Every variant is fatal for the operation that produced it: a scan that
/// hits one of these stops dispatching work and reports it as its result.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to walk directory tree at {root}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read metadata for {path}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open file: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scan timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Scan cancelled")]
    Cancelled,

    #[error("Failed to start worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl ScanError {
    /// Create a Walk error from the scan root and a traversal error.
    pub fn walk(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Walk {
            root: root.into(),
            source,
        }
    }

    /// Create a Metadata error from a path and IO error.
    pub fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }

    /// Create an Open error from a path and IO error.
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a Read error from a path and IO error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only reports that the scan was stopped.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::TimedOut(_))
    }
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Render an error followed by its `source()` chain, one cause per segment.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_display() {
        let err = ScanError::open("/path/to/run.sh", io::Error::other("denied"));
        assert_eq!(err.to_string(), "Failed to open file: /path/to/run.sh");
    }

    #[test]
    fn test_read_error_display() {
        let err = ScanError::read("/path/to/run.sh", io::Error::other("eof"));
        assert!(err.to_string().contains("/path/to/run.sh"));
    }

    #[test]
    fn test_metadata_error_display() {
        let err = ScanError::metadata(
            "bin/tool",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "Failed to read metadata for bin/tool");
    }

    #[test]
    fn test_timed_out_display() {
        let err = ScanError::TimedOut(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "Scan timed out after 1.5s");
    }

    #[test]
    fn test_is_cancellation() {
        assert!(ScanError::Cancelled.is_cancellation());
        assert!(ScanError::TimedOut(Duration::from_secs(1)).is_cancellation());
        assert!(!ScanError::open("x", io::Error::other("boom")).is_cancellation());
    }

    #[test]
    fn test_error_chain_includes_source() {
        let err = ScanError::open(
            "run.sh",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            error_chain(&err),
            "Failed to open file: run.sh: permission denied"
        );
    }
}
