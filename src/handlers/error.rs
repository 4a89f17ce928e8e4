//! Handler-specific error types.

use crate::config::ConfigError;
use crate::error::ScanError;
use thiserror::Error;

/// Exit code for scan and extraction failures.
pub const EXIT_SCAN_FAILED: u8 = 1;
/// Exit code for configuration problems.
pub const EXIT_CONFIG_ERROR: u8 = 2;

/// Error type for CLI handler operations.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    #[error("Scan failed")]
    Scan(#[from] ScanError),
}

impl HandlerError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_CONFIG_ERROR,
            Self::Scan(_) => EXIT_SCAN_FAILED,
        }
    }
}

/// Result type alias for handler operations.
pub type HandlerResult<T> = std::result::Result<T, HandlerError>;
