//! Configuration model for action-lock.
//!
//! Raw inputs come from [`crate::cli::Cli`] (flags or `INPUT_*` / `GITHUB_*`
//! environment variables). This module validates them, applies defaults and
//! produces a [`Config`] before any network activity happens.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::Action;
