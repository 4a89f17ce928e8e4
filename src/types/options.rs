use super::{Sigil, SkipSet};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound on bytes read when classifying a file's first line.
pub const DEFAULT_FIRST_LINE_LIMIT: usize = 64 * 1024;

/// Everything a scan needs, passed explicitly to every entry point.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Marker that introduces an annotation.
    pub sigil: Sigil,
    /// Directories pruned from the walk.
    pub skip_dirs: SkipSet,
    /// Number of concurrent file tasks. None means available parallelism.
    pub jobs: Option<NonZeroUsize>,
    /// Overall deadline for the scan. None means no deadline.
    pub timeout: Option<Duration>,
    /// Whether to follow symbolic links during the walk.
    pub follow_symlinks: bool,
    /// Maximum bytes of the first line inspected by the text check.
    pub first_line_limit: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            sigil: Sigil::default(),
            skip_dirs: SkipSet::default(),
            jobs: None,
            timeout: None,
            follow_symlinks: false,
            first_line_limit: DEFAULT_FIRST_LINE_LIMIT,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sigil.
    pub fn with_sigil(mut self, sigil: Sigil) -> Self {
        self.sigil = sigil;
        self
    }

    /// Set the directories to skip.
    pub fn with_skip_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.skip_dirs = SkipSet::new(dirs);
        self
    }

    /// Set the worker count. Zero falls back to available parallelism.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = NonZeroUsize::new(jobs);
        self
    }

    /// Set the overall deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to follow symlinks.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set the first-line byte limit.
    pub fn with_first_line_limit(mut self, limit: usize) -> Self {
        self.first_line_limit = limit.max(1);
        self
    }

    /// Resolved worker count.
    pub fn worker_count(&self) -> usize {
        self.jobs
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
    }
}
