//! Shared cancellation for a single scan.

use crate::error::{Result, ScanError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cancellation flag plus an optional deadline, shared by every task of a
/// scan.
///
/// Tasks poll [`CancellationToken::check`] at their checkpoints; nothing is
/// interrupted preemptively.
#[derive(Debug)]
pub struct CancellationToken {
    cancelled: AtomicBool,
    started: Instant,
    timeout: Option<Duration>,
}

impl CancellationToken {
    /// Create a token without a deadline.
    pub fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            started: Instant::now(),
            timeout: None,
        }
    }

    /// Create a token that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::new()
        }
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether the deadline, if any, has passed.
    pub fn is_expired(&self) -> bool {
        self.timeout
            .is_some_and(|timeout| self.started.elapsed() >= timeout)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire) || self.is_expired()
    }

    /// Fail with `Cancelled` or `TimedOut` once the scan should stop.
    pub fn check(&self) -> Result<()> {
        if self.cancelled.load(Ordering::Acquire) {
            return Err(ScanError::Cancelled);
        }
        match self.timeout {
            Some(timeout) if self.started.elapsed() >= timeout => Err(ScanError::TimedOut(timeout)),
            _ => Ok(()),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
