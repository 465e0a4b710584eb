use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `--verbose` forces debug; otherwise `RUST_LOG` or warn.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries program output
        .init();
}
