//! Config resolution and validation.

use super::model::Config;
use super::types::{
    Action, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_STALE_THRESHOLD_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::backend::{GitRefBackend, is_url_path_safe};
use crate::cli::Cli;
use crate::error::{ActionLockError, Result};

/// Characters git forbids anywhere in a ref name.
const FORBIDDEN_REF_CHARS: &[char] = &['~', '^', ':', '?', '*', '[', '\\', ' '];

impl Config {
    /// Build a validated config from raw CLI/environment inputs.
    ///
    /// Empty strings count as unset, since the Actions runner exports empty
    /// `INPUT_*` variables for inputs the workflow did not provide.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - All required inputs present and well-formed
    /// * `Err(ActionLockError::ConfigError)` - First problem found (exit code 1)
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let action_input = non_empty(cli.action).unwrap_or_default();
        let action = Action::from_str(&action_input).ok_or_else(|| {
            config_error(format!(
                "invalid action \"{}\": must be 'acquire' or 'release'",
                action_input
            ))
        })?;

        let lock_name = required(cli.lock_name, "lock_name is required")?;
        validate_lock_name(&lock_name)?;

        let token = required(cli.token, "token is required")?;
        let repository = required(cli.repository, "GITHUB_REPOSITORY not set")?;
        let sha = required(cli.sha, "GITHUB_SHA not set")?;

        let timeout = parse_seconds(cli.timeout, "timeout", DEFAULT_TIMEOUT_SECS)?;
        let poll_interval =
            parse_seconds(cli.poll_interval, "poll_interval", DEFAULT_POLL_INTERVAL_SECS)?;
        let stale_threshold = parse_seconds(
            cli.stale_threshold,
            "stale_threshold",
            DEFAULT_STALE_THRESHOLD_SECS,
        )?;
        let fail_on_timeout = parse_bool(cli.fail_on_timeout, "fail_on_timeout", true)?;
        let api_url = non_empty(cli.api_url)
            .unwrap_or_else(|| GitRefBackend::DEFAULT_API_URL.to_string());

        let config = Config {
            action,
            lock_name,
            timeout,
            poll_interval,
            stale_threshold,
            fail_on_timeout,
            token,
            repository,
            sha,
            api_url,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field rules.
    ///
    /// - `poll_interval` must be positive
    /// - `repository` must look like `owner/name`
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval == 0 {
            return Err(config_error("poll_interval must be at least 1 second"));
        }

        let mut parts = self.repository.split('/');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        );
        if !well_formed {
            return Err(config_error(format!(
                "invalid repository \"{}\": expected 'owner/name'",
                self.repository
            )));
        }

        Ok(())
    }
}

/// Check that a lock name yields a valid ref name under `refs/locks/`.
///
/// Follows the rules of `git check-ref-format`.
pub(crate) fn validate_lock_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| -> Result<()> {
        Err(config_error(format!(
            "invalid lock_name \"{}\": {}",
            name, reason
        )))
    };

    if name.chars().any(|c| c.is_control() || FORBIDDEN_REF_CHARS.contains(&c)) {
        return invalid("contains a character not allowed in git ref names");
    }
    if !is_url_path_safe(name) {
        return invalid("must not contain '#', '%' or '?'");
    }
    if name.contains("..") || name.contains("@{") || name == "@" {
        return invalid("contains a sequence not allowed in git ref names");
    }
    if name.starts_with('/') || name.ends_with('/') || name.contains("//") {
        return invalid("must not start or end with '/' or contain empty components");
    }
    if name.ends_with('.') {
        return invalid("must not end with '.'");
    }
    for component in name.split('/') {
        if component.starts_with('.') || component.ends_with(".lock") {
            return invalid("components must not start with '.' or end with '.lock'");
        }
    }

    Ok(())
}

fn config_error(message: impl Into<String>) -> ActionLockError {
    ActionLockError::ConfigError(message.into())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, message: &str) -> Result<String> {
    non_empty(value).ok_or_else(|| config_error(message))
}

fn parse_seconds(value: Option<String>, name: &str, default: u64) -> Result<u64> {
    match non_empty(value) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            config_error(format!(
                "invalid {} \"{}\": expected a whole number of seconds",
                name, raw
            ))
        }),
    }
}

fn parse_bool(value: Option<String>, name: &str, default: bool) -> Result<bool> {
    let Some(raw) = non_empty(value) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Ok(true),
        "false" | "f" | "0" | "no" => Ok(false),
        _ => Err(config_error(format!(
            "invalid {} \"{}\": expected true or false",
            name, raw
        ))),
    }
}
