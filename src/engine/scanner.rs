//! Concurrent executable scan.
//!
//! The directory walk runs as one task inside a dedicated rayon pool and
//! spawns one task per executable file. Each task classifies its file and,
//! if it is text, extracts the first annotation into the shared collector.
//!
//! The first error recorded cancels the scan; tasks that have not started
//! yet return immediately and running tasks stop at their next line read.
//! An elapsed deadline is not an error: the walk stops dispatching, pending
//! tasks drop out quietly and the entries collected so far are returned.

use super::cancel::CancellationToken;
use super::extractor::Extractor;
use crate::aggregator::EntryCollector;
use crate::discovery::{DirectoryWalker, WalkConfig, is_text_file};
use crate::error::{Result, ScanError};
use crate::types::{Entry, ScanOptions};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, trace};

/// Finds annotated executables below a root directory.
#[derive(Debug, Clone, Default)]
pub struct ExecutableFinder {
    options: ScanOptions,
}

impl ExecutableFinder {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `root` and return one entry per qualifying file, unordered.
    ///
    /// The configured timeout, if any, starts now.
    pub fn find(&self, root: &Path) -> Result<Vec<Entry>> {
        let token = match self.options.timeout {
            Some(timeout) => CancellationToken::with_timeout(timeout),
            None => CancellationToken::new(),
        };
        self.find_with_token(root, &token)
    }

    /// Scan `root` under an externally owned token.
    ///
    /// Any error, including an explicit [`CancellationToken::cancel`],
    /// discards the collected entries. Reaching the token's deadline does
    /// not.
    pub fn find_with_token(&self, root: &Path, token: &CancellationToken) -> Result<Vec<Entry>> {
        let extractor = Extractor::new(&self.options.sigil)
            .with_cancellation(token)
            .with_line_limit(self.options.first_line_limit);
        let limit = self.options.first_line_limit;

        self.dispatch(root, token, |path| {
            process_file(path, &extractor, limit, token)
        })
    }

    /// Walk `root` and run `task` on every executable file in the pool.
    fn dispatch<F>(&self, root: &Path, token: &CancellationToken, task: F) -> Result<Vec<Entry>>
    where
        F: Fn(&Path) -> Result<Option<Entry>> + Sync,
    {
        let workers = self.options.worker_count();
        info!(root = %root.display(), workers, "Starting scan");

        // One extra thread keeps the walk going while every worker is busy.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers + 1)
            .thread_name(|i| format!("lx-scan-{i}"))
            .build()?;

        let walker = DirectoryWalker::new(
            WalkConfig::new(self.options.skip_dirs.clone())
                .with_follow_symlinks(self.options.follow_symlinks),
        );
        let state = ScanState::new(token);

        pool.scope(|scope| {
            for item in walker.executables(root) {
                if let Err(e) = token.check() {
                    state.fail(e);
                    break;
                }

                let path = match item {
                    Ok(path) => path,
                    Err(e) => {
                        state.fail(e);
                        break;
                    }
                };

                trace!(path = %path.display(), "Dispatching file");
                let state = &state;
                let task = &task;
                scope.spawn(move |_| match task(&path) {
                    Ok(Some(entry)) => state.collector.append(entry),
                    Ok(None) => {}
                    Err(e) => state.fail(e),
                });
            }
        });

        let result = state.finish();
        match &result {
            Ok(entries) => info!(entries = entries.len(), "Scan completed"),
            Err(e) => debug!(error = %e, "Scan failed"),
        }
        result
    }
}

/// Classify one file and read its first annotation if it qualifies.
fn process_file(
    path: &Path,
    extractor: &Extractor<'_>,
    limit: usize,
    token: &CancellationToken,
) -> Result<Option<Entry>> {
    token.check()?;

    if !is_text_file(path, limit)? {
        debug!(path = %path.display(), "Skipping non-UTF-8 file");
        return Ok(None);
    }

    let message = extractor.first_message(path)?;
    Ok(Some(Entry::new(path, message)))
}

/// State shared by the walk and every file task of one scan.
struct ScanState<'a> {
    token: &'a CancellationToken,
    collector: EntryCollector,
    first_error: Mutex<Option<ScanError>>,
}

impl<'a> ScanState<'a> {
    fn new(token: &'a CancellationToken) -> Self {
        Self {
            token,
            collector: EntryCollector::new(),
            first_error: Mutex::new(None),
        }
    }

    /// Record `err` if it is the first one, then cancel the scan.
    ///
    /// A deadline is only noted: the token already reports it to every
    /// later checkpoint.
    fn fail(&self, err: ScanError) {
        if let ScanError::TimedOut(timeout) = err {
            trace!(?timeout, "Deadline reached, dropping task");
            return;
        }

        {
            let mut slot = self
                .first_error
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match *slot {
                None => {
                    debug!(error = %err, "Cancelling scan");
                    *slot = Some(err);
                }
                Some(_) if err.is_cancellation() => {}
                Some(_) => debug!(error = %err, "Dropping additional scan error"),
            }
        }
        self.token.cancel();
    }

    fn finish(self) -> Result<Vec<Entry>> {
        let first_error = self
            .first_error
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        match first_error {
            Some(err) => Err(err),
            None => {
                if self.token.is_expired() {
                    info!("Deadline reached, returning partial results");
                }
                Ok(self.collector.into_entries())
            }
        }
    }
}
