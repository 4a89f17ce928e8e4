//! Aggregation layer.
//!
//! Collects entries produced by concurrent scan tasks. Ordering is left to
//! the caller.

pub mod collector;

pub use collector::EntryCollector;
