//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_level`, so stdout stays free for
/// command output either way.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
