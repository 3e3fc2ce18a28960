use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Installs the stderr subscriber for the process.
///
/// `filter` is an `EnvFilter` directive string such as `warn` or
/// `gavel_engine=debug`. An unparsable directive falls back to the default
/// `warn`. A second call is a no-op, so tests can call it freely.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
