//! Discovery layer for scan target enumeration.
//!
//! This module handles:
//! - Directory traversal with skip-set pruning
//! - Executable permission checks
//! - First-line text detection

pub mod text_detection;
pub mod walker;

pub use text_detection::{first_line_is_utf8, is_executable, is_text_file, mode_is_executable};
pub use walker::{DirectoryWalker, WalkConfig, clean_path, traversal_path};
