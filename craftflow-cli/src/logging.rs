use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber.
///
/// Respects `RUST_LOG`. Without it the filter is `warn`, or `debug` for the
/// crate when `verbose` is set. Output goes to stderr so it never mixes with
/// the progress lines printed on stdout.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "warn,craftflow_cli=debug,craftflow=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
