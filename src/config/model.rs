//! Config struct definition.

use super::types::Action;
use crate::locks::AcquirePolicy;
use std::fmt;
use std::time::Duration;

/// Validated inputs for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Acquire or release.
    pub action: Action,

    /// Name of the lock (`refs/locks/<lock_name>`).
    pub lock_name: String,

    /// Seconds to keep trying before giving up.
    pub timeout: u64,

    /// Seconds between attempts. Never zero.
    pub poll_interval: u64,

    /// Seconds after which a held lock is presumed abandoned.
    pub stale_threshold: u64,

    /// Whether a timed-out acquire fails the step.
    pub fail_on_timeout: bool,

    /// Bearer token for the API.
    pub token: String,

    /// Repository holding the lock refs (`owner/name`).
    pub repository: String,

    /// Commit SHA recorded as the lock owner.
    pub sha: String,

    /// Base URL of the API.
    pub api_url: String,
}

impl Config {
    /// Timing policy for the lock orchestrator.
    pub fn acquire_policy(&self) -> AcquirePolicy {
        AcquirePolicy {
            timeout: Duration::from_secs(self.timeout),
            poll_interval: Duration::from_secs(self.poll_interval),
            stale_threshold: Duration::from_secs(self.stale_threshold),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("action", &self.action)
            .field("lock_name", &self.lock_name)
            .field("timeout", &self.timeout)
            .field("poll_interval", &self.poll_interval)
            .field("stale_threshold", &self.stale_threshold)
            .field("fail_on_timeout", &self.fail_on_timeout)
            .field("token", &"***")
            .field("repository", &self.repository)
            .field("sha", &self.sha)
            .field("api_url", &self.api_url)
            .finish()
    }
}
