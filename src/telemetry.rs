use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber shared by every binary. `RUST_LOG` wins over
/// the `info` default. Logs go to stderr so the storefront's page output on
/// stdout stays clean.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
