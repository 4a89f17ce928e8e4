//! Scan execution and orchestration.
//!
//! This module provides:
//! - Scan mode determination (directory scan or single-file describe)
//! - Configuration merging (CLI + config file)
//! - Running the scan and formatting its output

pub mod config;
mod scanner;

pub use config::{DEFAULT_TIMEOUT_MS, EffectiveConfig};
pub use scanner::{ScanMode, load_config, run_scan, run_scan_with_config};
