//! Lock naming and age types.

use chrono::{DateTime, Utc};
use std::fmt;

/// Full ref name for a lock, e.g. `refs/locks/deploy`.
pub fn lock_ref(lock_name: &str) -> String {
    format!("refs/{}", lock_ref_path(lock_name))
}

/// Ref path below `refs/`, as used in the git refs API URLs.
pub fn lock_ref_path(lock_name: &str) -> String {
    format!("locks/{}", lock_name)
}

/// Characters git allows in ref names that change the meaning of a URL path:
/// `#` starts a fragment and `%` starts an escape.
const URL_PATH_UNSAFE_CHARS: &[char] = &['#', '%', '?'];

/// Whether `lock_name` can be placed in a request path unchanged.
pub fn is_url_path_safe(lock_name: &str) -> bool {
    !lock_name.contains(URL_PATH_UNSAFE_CHARS)
}

/// Age of a lock, computed on demand from the committer timestamp of the
/// commit the lock ref points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAge {
    /// The lock ref does not exist.
    Absent,
    /// The lock ref exists; its commit is this many whole seconds old.
    Held { seconds: i64 },
}

impl LockAge {
    /// Numeric stand-in for [`LockAge::Absent`].
    pub const ABSENT_SECONDS: i64 = -1;

    /// Compute the age of a commit dated `committed_at`, as seen at `now`.
    ///
    /// Rounds toward zero. A commit dated in the future yields a negative age.
    pub fn since(committed_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        LockAge::Held {
            seconds: now.signed_duration_since(committed_at).num_seconds(),
        }
    }

    /// Age in seconds, or `-1` when the lock does not exist.
    pub fn as_seconds(&self) -> i64 {
        match self {
            LockAge::Absent => Self::ABSENT_SECONDS,
            LockAge::Held { seconds } => *seconds,
        }
    }

    /// Age in seconds if the lock exists.
    pub fn known(&self) -> Option<i64> {
        match self {
            LockAge::Absent => None,
            LockAge::Held { seconds } => Some(*seconds),
        }
    }
}

impl fmt::Display for LockAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockAge::Absent => write!(f, "absent"),
            LockAge::Held { seconds } => write!(f, "{}s", seconds),
        }
    }
}
