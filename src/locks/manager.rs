//! The acquire/release loop.

use super::clock::{Clock, SystemClock};
use super::types::{AcquirePolicy, AttemptOutcome};
use crate::backend::{BackendResult, LockAge, LockBackend};
use tracing::{debug, info, warn};

/// Acquires and releases named locks on a [`LockBackend`].
///
/// Holds no lock state of its own: every decision is made from a fresh
/// backend call.
pub struct LockManager<B, C = SystemClock> {
    backend: B,
    policy: AcquirePolicy,
    clock: C,
}

impl<B: LockBackend> LockManager<B> {
    /// Create a manager that sleeps on the system clock.
    pub fn new(backend: B, policy: AcquirePolicy) -> Self {
        Self::with_clock(backend, policy, SystemClock)
    }
}

impl<B: LockBackend, C: Clock> LockManager<B, C> {
    /// Create a manager with an explicit time source.
    pub fn with_clock(backend: B, policy: AcquirePolicy, clock: C) -> Self {
        Self {
            backend,
            policy,
            clock,
        }
    }

    /// The policy this manager acquires with.
    pub fn policy(&self) -> &AcquirePolicy {
        &self.policy
    }

    /// Try once to create the lock ref.
    pub fn attempt(&self, lock_name: &str, owner_marker: &str) -> AttemptOutcome {
        self.backend.try_create(lock_name, owner_marker).into()
    }

    /// Block until the lock is acquired or the timeout passes.
    ///
    /// Returns `false` on timeout. Backend errors along the way are logged
    /// and retried on the next round.
    pub fn acquire(&self, lock_name: &str, owner_marker: &str) -> bool {
        let deadline = self.clock.now() + self.policy.timeout;
        let mut reclaimed_last_round = false;

        loop {
            match self.attempt(lock_name, owner_marker) {
                AttemptOutcome::Acquired => {
                    info!(lock = lock_name, "Lock acquired");
                    return true;
                }
                AttemptOutcome::Conflict => {}
                AttemptOutcome::Failed(e) => {
                    warn!(lock = lock_name, error = %e, "Lock attempt failed");
                }
            }

            // A second stale reading right after a reclaim means the delete
            // did not stick; fall back to waiting instead of spinning.
            if !reclaimed_last_round && self.reclaim_if_stale(lock_name) {
                reclaimed_last_round = true;
                continue;
            }
            reclaimed_last_round = false;

            let now = self.clock.now();
            if now >= deadline {
                return false;
            }

            let remaining = deadline.saturating_duration_since(now);
            info!(
                lock = lock_name,
                retry_in_secs = self.policy.poll_interval.as_secs(),
                remaining_secs = remaining.as_secs(),
                "Lock held by another process, waiting"
            );
            self.clock.sleep(self.policy.poll_interval);
        }
    }

    /// Remove the lock if its age exceeds the stale threshold.
    ///
    /// Returns `true` when a stale lock was found (whether or not the delete
    /// succeeded).
    fn reclaim_if_stale(&self, lock_name: &str) -> bool {
        let age = match self.backend.read_age(lock_name) {
            Ok(age) => age,
            Err(e) => {
                warn!(lock = lock_name, error = %e, "Could not read lock age");
                return false;
            }
        };

        let Some(seconds) = age.known().filter(|&s| self.policy.is_stale(s)) else {
            debug!(lock = lock_name, age = %age, "Lock is not stale");
            return false;
        };

        info!(
            lock = lock_name,
            age_secs = seconds,
            threshold_secs = self.policy.stale_threshold.as_secs(),
            "Stale lock detected, removing"
        );
        if let Err(e) = self.backend.delete(lock_name) {
            warn!(lock = lock_name, error = %e, "Failed to remove stale lock");
        }
        true
    }

    /// Release the lock. Releasing a lock that does not exist succeeds.
    pub fn release(&self, lock_name: &str) -> BackendResult<()> {
        self.backend.delete(lock_name)
    }

    /// Current age of the lock, read from the backend.
    pub fn lock_age(&self, lock_name: &str) -> BackendResult<LockAge> {
        self.backend.read_age(lock_name)
    }
}
