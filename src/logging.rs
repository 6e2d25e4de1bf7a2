//! Tracing setup.
//!
//! Logs go to stderr so stdout stays reserved for workflow commands
//! (`::error::`, `::set-output`). The filter comes from `RUST_LOG` and
//! defaults to `info`.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}
