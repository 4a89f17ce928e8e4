//! Find executables in a directory tree and read their `lx:` annotations.
//!
//! ```no_run
//! let mut entries = lx::find_executables(".", [".git"])?;
//! lx::sort_by_path(&mut entries);
//! for entry in &entries {
//!     println!("{}  {}", entry.path.display(), entry.message);
//! }
//! # Ok::<(), lx::ScanError>(())
//! ```

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod output;
pub mod reporter;
pub mod run;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::EntryCollector;
pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError};
pub use discovery::{DirectoryWalker, WalkConfig};
pub use engine::{Annotations, CancellationToken, ExecutableFinder, Extractor};
pub use error::{Result, ScanError};
pub use output::OutputFormatter;
pub use run::{EffectiveConfig, run_scan};
pub use types::{DEFAULT_SIGIL, Entry, ScanOptions, Sigil, SkipSet, sort_by_path};

use std::path::{Path, PathBuf};

/// Scan `root` for qualifying executables and their first annotation.
///
/// Directories whose walked path equals one of `skip_dirs` are pruned with
/// their subtree. The result is unordered; see [`sort_by_path`].
pub fn find_executables(
    root: impl AsRef<Path>,
    skip_dirs: impl IntoIterator<Item = impl Into<PathBuf>>,
) -> Result<Vec<Entry>> {
    ExecutableFinder::new(ScanOptions::new().with_skip_dirs(skip_dirs)).find(root.as_ref())
}

/// Every annotation in the file at `path`, joined by newlines in file order.
///
/// The file is read as is: no executable or text check is made.
pub fn all_messages(path: impl AsRef<Path>) -> Result<String> {
    let sigil = Sigil::default();
    Extractor::new(&sigil).all_messages(path.as_ref())
}
