//! Diagnostic logging setup.
//!
//! User-facing text goes through [`crate::output::OutputSink`]; this is only
//! for `tracing` diagnostics, written to stderr and controlled by `-v`.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::new(filter_directive(verbosity));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
