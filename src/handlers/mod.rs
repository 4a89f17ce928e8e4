//! CLI command handlers.
//!
//! Handler functions live here rather than in main.rs so they can be unit
//! tested.

pub mod error;
mod scan;

pub use error::{EXIT_CONFIG_ERROR, EXIT_SCAN_FAILED, HandlerError, HandlerResult};
pub use scan::run_normal_mode;
