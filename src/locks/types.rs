//! Acquire policy and attempt outcome types.

use crate::backend::BackendError;
use std::time::Duration;

/// Timing policy for a single acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquirePolicy {
    /// How long to keep trying before giving up.
    pub timeout: Duration,

    /// Wait between unsuccessful attempts.
    pub poll_interval: Duration,

    /// A held lock older than this is presumed abandoned and removed.
    /// Must exceed the longest legitimate hold time.
    pub stale_threshold: Duration,
}

impl AcquirePolicy {
    /// Whether a lock of `age_seconds` has outlived the stale threshold.
    pub fn is_stale(&self, age_seconds: i64) -> bool {
        let threshold = i64::try_from(self.stale_threshold.as_secs()).unwrap_or(i64::MAX);
        age_seconds > threshold
    }
}

impl Default for AcquirePolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(300),
            poll_interval: Duration::from_secs(10),
            stale_threshold: Duration::from_secs(600),
        }
    }
}

/// Result of one create attempt.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// This attempt created the lock ref.
    Acquired,
    /// Someone else holds the lock.
    Conflict,
    /// The attempt failed; counts as "not acquired this round".
    Failed(BackendError),
}

impl From<Result<bool, BackendError>> for AttemptOutcome {
    fn from(result: Result<bool, BackendError>) -> Self {
        match result {
            Ok(true) => AttemptOutcome::Acquired,
            Ok(false) => AttemptOutcome::Conflict,
            Err(e) => AttemptOutcome::Failed(e),
        }
    }
}
