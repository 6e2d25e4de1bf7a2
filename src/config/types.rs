//! Configuration types and defaults for action-lock.

use std::fmt;

/// Default seconds to wait for the lock.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Default seconds between acquisition attempts.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Default age in seconds after which a held lock is considered abandoned.
pub const DEFAULT_STALE_THRESHOLD_SECS: u64 = 600;

/// What an invocation does with the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Wait for and take the lock.
    Acquire,
    /// Give the lock back.
    Release,
}

impl Action {
    /// Parse an action from its input value.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "acquire" => Some(Self::Acquire),
            "release" => Some(Self::Release),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Acquire => "acquire",
            Action::Release => "release",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
