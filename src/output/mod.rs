//! Output layer.
//!
//! This module handles output formatting and reporting:
//! - Terminal table with `PATH` and `INFO` columns
//! - JSON output for machine consumption

pub mod formatter;

pub use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};

pub use formatter::OutputFormatter;
