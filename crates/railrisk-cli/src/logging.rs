use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber; stdout is reserved for the JSON payload.
/// An unparsable filter silences logging rather than failing the command.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
