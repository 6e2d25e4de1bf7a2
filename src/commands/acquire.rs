//! `acquire`: wait for the lock and report the outcome.

use super::set_lock_outputs;
use crate::backend::{LockAge, LockBackend};
use crate::config::Config;
use crate::error::{ActionLockError, Result};
use crate::locks::{Clock, LockManager};
use crate::outputs::{self, StepOutputs};
use tracing::{debug, warn};

/// Acquire the configured lock.
///
/// # Returns
///
/// * `Ok(())` - Lock acquired, or timed out with `fail_on_timeout` disabled
/// * `Err(ActionLockError::LockTimeout)` - Timed out (exit code 4)
pub fn cmd_acquire<B: LockBackend, C: Clock>(
    manager: &LockManager<B, C>,
    config: &Config,
    outputs: &StepOutputs,
) -> Result<()> {
    let acquired = manager.acquire(&config.lock_name, &config.sha);
    set_lock_outputs(outputs, &config.lock_name, acquired);

    if acquired {
        warn_if_owner_marker_is_stale(manager, config);
        return Ok(());
    }

    let err = ActionLockError::LockTimeout {
        name: config.lock_name.clone(),
        timeout_secs: config.timeout,
    };
    if config.fail_on_timeout {
        return Err(err);
    }

    outputs::warning(&format!("{} (fail_on_timeout is false, continuing)", err));
    Ok(())
}

/// Staleness is measured from the owner marker commit, not from when the ref
/// was created. A marker commit that is already older than the threshold
/// makes the freshly acquired lock look abandoned to every other waiter.
fn warn_if_owner_marker_is_stale<B: LockBackend, C: Clock>(
    manager: &LockManager<B, C>,
    config: &Config,
) {
    if let Some(message) = stale_owner_marker_message(manager, config) {
        warn!("{}", message);
        outputs::warning(&message);
    }
}

/// Warning text for a held lock whose marker commit is past the threshold.
pub(crate) fn stale_owner_marker_message<B: LockBackend, C: Clock>(
    manager: &LockManager<B, C>,
    config: &Config,
) -> Option<String> {
    match manager.lock_age(&config.lock_name) {
        Ok(LockAge::Held { seconds }) if manager.policy().is_stale(seconds) => Some(format!(
            "Lock \"{}\" points at commit {} which is already {}s old (stale threshold {}s); \
             other runs may reclaim it as stale",
            config.lock_name, config.sha, seconds, config.stale_threshold
        )),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "Could not read age of acquired lock");
            None
        }
    }
}
