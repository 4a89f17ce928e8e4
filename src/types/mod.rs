//! Core value types shared by the scan engine and its callers.

mod entry;
mod options;
mod sigil;
mod skip_set;

pub use entry::{Entry, sort_by_path};
pub use options::{DEFAULT_FIRST_LINE_LIMIT, ScanOptions};
pub use sigil::{DEFAULT_SIGIL, Sigil};
pub use skip_set::SkipSet;
