use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging.
///
/// Level comes from `RUST_LOG` (default `info`, or `debug` with
/// `verbose`). Logs go to stderr so stdout stays clean JSON.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
