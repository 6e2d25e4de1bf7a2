//! action-lock: advisory distributed lock for CI workflows backed by git refs.
//!
//! This is the main entry point for the `action-lock` CLI. It parses inputs,
//! dispatches to the acquire or release command, and maps errors to exit
//! codes and workflow annotations.

pub mod backend;
pub mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod locks;
mod logging;
pub mod outputs;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use outputs::StepOutputs;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse_args();

    let result = Config::from_cli(cli)
        .and_then(|config| commands::dispatch(&config, &StepOutputs::from_env()));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Surface the failure as a workflow annotation
            outputs::error(&err.to_string());

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
