//! `release`: give the lock back.

use super::set_lock_outputs;
use crate::backend::LockBackend;
use crate::config::Config;
use crate::error::Result;
use crate::locks::{Clock, LockManager};
use crate::outputs::{self, StepOutputs};
use tracing::{info, warn};

/// Release the configured lock.
///
/// A failed delete is reported as a warning rather than failing the step:
/// the lock either is already gone or will be reclaimed as stale later.
pub fn cmd_release<B: LockBackend, C: Clock>(
    manager: &LockManager<B, C>,
    config: &Config,
    outputs: &StepOutputs,
) -> Result<()> {
    match manager.release(&config.lock_name) {
        Ok(()) => info!(lock = %config.lock_name, "Lock released"),
        Err(e) => {
            warn!(lock = %config.lock_name, error = %e, "Failed to release lock");
            outputs::warning(&format!(
                "Failed to release lock \"{}\": {}",
                config.lock_name, e
            ));
        }
    }

    set_lock_outputs(outputs, &config.lock_name, false);
    Ok(())
}
