use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr so the report body on stdout stays clean.
///
/// Level defaults to `warn` and can be overridden via `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
