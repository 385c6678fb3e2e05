use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize diagnostic logging on stderr.
///
/// Stdout stays reserved for command output. The level defaults to `warn`
/// (`debug` with `verbose`) and can be overridden with `RUST_LOG`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let default_filter = format!("civlab={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .try_init();

    tracing::debug!(verbose, "Logging initialized");
}
