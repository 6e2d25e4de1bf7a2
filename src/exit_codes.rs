//! Exit code constants for the action-lock CLI.
//!
//! - 0: Success (including a release of a lock that was already gone)
//! - 1: User error (missing or invalid inputs)
//! - 4: Lock acquisition failure (timed out while `fail_on_timeout` is set)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing required inputs, invalid action, malformed values.
pub const USER_ERROR: i32 = 1;

/// Lock acquisition failure: the lock could not be acquired before the deadline.
pub const LOCK_FAILURE: i32 = 4;
