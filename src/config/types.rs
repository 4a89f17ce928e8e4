//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for lx.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan configuration.
    pub scan: ScanConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Scan configuration (mirrors the scan-related CLI options).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directories to skip, matched exactly against traversal paths.
    pub skip_dirs: Vec<PathBuf>,
    /// Annotation marker. Defaults to "lx:".
    pub sigil: Option<String>,
    /// Overall scan deadline in milliseconds. 0 disables the deadline.
    pub timeout_ms: Option<u64>,
    /// Number of concurrent file tasks.
    pub jobs: Option<usize>,
    /// Follow symbolic links while walking.
    pub follow_symlinks: bool,
    /// Maximum bytes of a file's first line inspected by the text check.
    pub first_line_limit: Option<usize>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "terminal" or "json".
    pub format: Option<String>,
    /// Disable colored output.
    pub no_color: bool,
}
