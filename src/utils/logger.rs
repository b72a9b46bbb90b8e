use tracing_subscriber::EnvFilter;

/// Variable holding the `tracing` filter directives, e.g. `SDYN_LOG=debug`.
pub const LOG_ENV: &str = "SDYN_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Installs a stderr `fmt` subscriber filtered by `SDYN_LOG`.
///
/// Does nothing when a global subscriber is already set, so embedders keep
/// their own.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
