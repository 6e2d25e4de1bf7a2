//! Lock orchestration.
//!
//! Turns the backend's single-shot create into a blocking acquire:
//!
//! ```text
//! Attempting ──created──────────────────────────────▶ Acquired
//!     │
//!     └─conflict / error──▶ CheckingStaleness
//!                              │ age > threshold ──▶ Reclaiming ──▶ Attempting
//!                              │ deadline passed ──▶ TimedOut
//!                              └ otherwise ────────▶ Waiting ─────▶ Attempting
//! ```
//!
//! # Staleness
//!
//! A lock whose commit is older than the stale threshold is presumed
//! abandoned by a holder that crashed before releasing. The age comes from
//! the commit the ref points at, so it is only meaningful when the owner
//! marker is a recent commit.
//!
//! # Fairness
//!
//! There is no queue. Every waiter polls independently and the backend's
//! atomic create decides who wins each round.

mod clock;
mod manager;
mod types;


// Re-export public API
pub use clock::{Clock, SystemClock};
pub use manager::LockManager;
pub use types::{AcquirePolicy, AttemptOutcome};
