//! CLI argument parsing for action-lock.
//!
//! Every input can come from a flag or from the environment variable the
//! GitHub Actions runner exports for it (`INPUT_*`, `GITHUB_*`). Values are
//! kept as raw strings here; [`crate::config::Config`] validates them and
//! applies defaults.

use clap::Parser;

/// action-lock: advisory distributed lock for CI workflows backed by git refs.
///
/// The lock `<name>` is the ref `refs/locks/<name>` in the target repository.
/// Creating the ref acquires the lock; deleting it releases the lock.
#[derive(Parser, Debug, Default)]
#[command(name = "action-lock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// What to do: `acquire` or `release`.
    #[arg(long, env = "INPUT_ACTION")]
    pub action: Option<String>,

    /// Name of the lock.
    #[arg(long, env = "INPUT_LOCK_NAME")]
    pub lock_name: Option<String>,

    /// API token with permission to write refs.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository holding the lock refs (`owner/name`).
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Commit SHA recorded as the lock owner.
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Seconds to wait for the lock before giving up (default: 300).
    #[arg(long, env = "INPUT_TIMEOUT")]
    pub timeout: Option<String>,

    /// Seconds between acquisition attempts (default: 10).
    #[arg(long, env = "INPUT_POLL_INTERVAL")]
    pub poll_interval: Option<String>,

    /// Seconds after which a held lock is considered abandoned (default: 600).
    #[arg(long, env = "INPUT_STALE_THRESHOLD")]
    pub stale_threshold: Option<String>,

    /// Exit non-zero when the lock cannot be acquired in time (default: true).
    #[arg(long, env = "INPUT_FAIL_ON_TIMEOUT")]
    pub fail_on_timeout: Option<String>,

    /// Base URL of the API (default: https://api.github.com).
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,
}

impl Cli {
    /// Parse command-line arguments and environment.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
