//! Step outputs and workflow annotations for the GitHub Actions runner.
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`. Without that
//! variable (older runners, local runs) the legacy `::set-output` workflow
//! command is printed instead. Annotations are printed to stdout as
//! `::error::` or `::warning::` workflow commands.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Delimiter for multi-line values in the output file.
const HEREDOC_DELIMITER: &str = "ACTION_LOCK_EOF";

/// Where step outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutputs {
    output_file: Option<PathBuf>,
}

impl StepOutputs {
    /// Outputs destination taken from `GITHUB_OUTPUT`.
    pub fn from_env() -> Self {
        let output_file = std::env::var_os("GITHUB_OUTPUT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { output_file }
    }

    /// Outputs appended to the given file.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            output_file: Some(path.into()),
        }
    }

    /// Set a step output.
    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().append(true).create(true).open(path)?;
                file.write_all(format_output_entry(key, value).as_bytes())
            }
            None => {
                println!("{}", workflow_command(&format!("set-output name={}", key), value));
                Ok(())
            }
        }
    }
}

/// Format one `GITHUB_OUTPUT` entry, using the heredoc form for multi-line values.
pub fn format_output_entry(key: &str, value: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        format!(
            "{key}<<{delim}\n{value}\n{delim}\n",
            key = key,
            delim = HEREDOC_DELIMITER,
            value = value
        )
    } else {
        format!("{}={}\n", key, value)
    }
}

/// Format a workflow command, escaping the message data.
pub fn workflow_command(command: &str, message: &str) -> String {
    format!("::{}::{}", command, escape_data(message))
}

/// Escape `%`, CR and LF so a message stays on one command line.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Print an error annotation.
pub fn error(message: &str) {
    println!("{}", workflow_command("error", message));
}

/// Print a warning annotation.
pub fn warning(message: &str) {
    println!("{}", workflow_command("warning", message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_appends_to_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output");
        std::fs::write(&path, "existing=1\n").unwrap();

        let outputs = StepOutputs::with_file(&path);
        outputs.set("acquired", "true").unwrap();
        outputs.set("lock_ref", "refs/locks/deploy").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "existing=1\nacquired=true\nlock_ref=refs/locks/deploy\n"
        );
    }

    #[test]
    fn test_set_creates_missing_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output");

        StepOutputs::with_file(&path).set("acquired", "false").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "acquired=false\n");
    }

    #[test]
    fn test_set_fails_when_directory_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("output");

        assert!(StepOutputs::with_file(&path).set("acquired", "true").is_err());
    }

    #[test]
    fn test_multiline_values_use_heredoc() {
        assert_eq!(
            format_output_entry("note", "line one\nline two"),
            "note<<ACTION_LOCK_EOF\nline one\nline two\nACTION_LOCK_EOF\n"
        );
        assert_eq!(format_output_entry("acquired", "true"), "acquired=true\n");
    }

    #[test]
    fn test_workflow_command_escapes_data() {
        assert_eq!(
            workflow_command("error", "Failed to acquire lock \"deploy\" within 30s"),
            "::error::Failed to acquire lock \"deploy\" within 30s"
        );
        assert_eq!(
            workflow_command("warning", "100% done\nnext\r"),
            "::warning::100%25 done%0Anext%0D"
        );
        assert_eq!(
            workflow_command("set-output name=acquired", "true"),
            "::set-output name=acquired::true"
        );
    }
}
