//! Lock backend adapter.
//!
//! A lock is a git reference named `refs/locks/<name>` on the hosting
//! service. The backend exposes the three reference operations the lock
//! protocol needs:
//!
//! - `try_create`: atomic create-if-absent. The only source of mutual exclusion.
//! - `delete`: idempotent removal (an already-missing ref counts as deleted).
//! - `read_age`: resolve the ref to its commit, then the commit to its
//!   committer timestamp, and report how old it is.
//!
//! No retries happen here; retry policy belongs to [`crate::locks`].

mod error;
mod github;
mod types;
mod wire;


// Re-export public API
pub use error::{BackendError, BackendResult};
pub use github::GitRefBackend;
pub use types::{LockAge, is_url_path_safe, lock_ref, lock_ref_path};

/// The reference operations the lock orchestrator is built on.
///
/// Implementations must treat "already exists" on create as `Ok(false)` and
/// "not found" on delete as `Ok(())`; both are expected under contention.
pub trait LockBackend {
    /// Try to create the lock ref pointing at `owner_marker`.
    ///
    /// Returns `Ok(true)` when this call created the ref and `Ok(false)` when
    /// the ref already exists.
    fn try_create(&self, lock_name: &str, owner_marker: &str) -> BackendResult<bool>;

    /// Delete the lock ref. Deleting a missing ref succeeds.
    fn delete(&self, lock_name: &str) -> BackendResult<()>;

    /// Read the age of the lock ref's commit.
    ///
    /// A missing ref is `Ok(LockAge::Absent)`. A ref whose commit cannot be
    /// read is an error.
    fn read_age(&self, lock_name: &str) -> BackendResult<LockAge>;
}

impl<T: LockBackend + ?Sized> LockBackend for &T {
    fn try_create(&self, lock_name: &str, owner_marker: &str) -> BackendResult<bool> {
        (**self).try_create(lock_name, owner_marker)
    }

    fn delete(&self, lock_name: &str) -> BackendResult<()> {
        (**self).delete(lock_name)
    }

    fn read_age(&self, lock_name: &str) -> BackendResult<LockAge> {
        (**self).read_age(lock_name)
    }
}
