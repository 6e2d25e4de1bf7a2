//! Error types for the action-lock CLI.
//!
//! Uses thiserror for derive macros and provides operator-facing messages.
//! Backend (HTTP) failures live in [`crate::backend::BackendError`]; they are
//! recoverable inside the acquire loop and never reach this type directly.

use crate::exit_codes;
use thiserror::Error;

/// Top-level error for a single action-lock invocation.
#[derive(Error, Debug)]
pub enum ActionLockError {
    /// Required input missing or malformed. Raised before any network call.
    #[error("{0}")]
    ConfigError(String),

    /// The lock was still held by someone else when the deadline passed.
    #[error("Failed to acquire lock \"{name}\" within {timeout_secs}s")]
    LockTimeout { name: String, timeout_secs: u64 },
}

impl ActionLockError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ActionLockError::ConfigError(_) => exit_codes::USER_ERROR,
            ActionLockError::LockTimeout { .. } => exit_codes::LOCK_FAILURE,
        }
    }
}

/// Result type alias for command-level operations.
pub type Result<T> = std::result::Result<T, ActionLockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = ActionLockError::ConfigError("token is required".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn lock_timeout_has_correct_exit_code() {
        let err = ActionLockError::LockTimeout {
            name: "deploy".to_string(),
            timeout_secs: 30,
        };
        assert_eq!(err.exit_code(), exit_codes::LOCK_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ActionLockError::ConfigError("lock_name is required".to_string());
        assert_eq!(err.to_string(), "lock_name is required");

        let err = ActionLockError::LockTimeout {
            name: "deploy".to_string(),
            timeout_secs: 300,
        };
        assert_eq!(err.to_string(), "Failed to acquire lock \"deploy\" within 300s");
    }
}
