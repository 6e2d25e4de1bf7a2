//! Command implementations for action-lock.
//!
//! Routes the configured action to its handler. Handlers are generic over
//! the backend and clock so they can run against an in-memory stub.

mod acquire;
mod release;


use crate::backend::{GitRefBackend, lock_ref};
use crate::config::{Action, Config};
use crate::error::Result;
use crate::locks::LockManager;
use crate::outputs::StepOutputs;
use tracing::{info, warn};

pub use acquire::cmd_acquire;
pub use release::cmd_release;

/// Dispatch the configured action against the git refs API.
pub fn dispatch(config: &Config, outputs: &StepOutputs) -> Result<()> {
    let backend = GitRefBackend::new(&config.api_url, &config.repository, &config.token);
    let manager = LockManager::new(backend, config.acquire_policy());
    info!(
        action = %config.action,
        lock = %config.lock_name,
        repository = %config.repository,
        "Running lock action"
    );

    match config.action {
        Action::Acquire => cmd_acquire(&manager, config, outputs),
        Action::Release => cmd_release(&manager, config, outputs),
    }
}

/// Set the `acquired` and `lock_ref` outputs. Write failures are logged only.
fn set_lock_outputs(outputs: &StepOutputs, lock_name: &str, acquired: bool) {
    let entries = [
        ("acquired", acquired.to_string()),
        ("lock_ref", lock_ref(lock_name)),
    ];
    for (key, value) in entries {
        if let Err(e) = outputs.set(key, &value) {
            warn!(output = key, error = %e, "Failed to write step output");
        }
    }
}
