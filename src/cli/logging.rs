//! Diagnostic logging for the binary. Everything goes to stderr so prompts
//! and results on stdout stay clean.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins unless `--verbose` is set.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
