//! Logging initialisation

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// RUST_LOG wins; otherwise `--verbose` means debug and the configured
/// level applies.
pub fn init(config_level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { config_level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber is already installed when execute runs more than once in
    // one process (tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
