//! Scan engine.
//!
//! This module provides the core functionality:
//! - Cancellation shared across one scan
//! - Annotation extraction (first match and all matches)
//! - The concurrent executable finder
//!
//! The engine takes paths from the discovery layer and produces entries
//! for the aggregator.

pub mod cancel;
pub mod extractor;
pub mod scanner;

pub use cancel::CancellationToken;
pub use extractor::{Annotations, Extractor};
pub use scanner::ExecutableFinder;
