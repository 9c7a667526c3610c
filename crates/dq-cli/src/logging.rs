//! Log subscriber setup.  Everything goes to stderr; stdout carries only the
//! table.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// With no `-v` the filter comes from `RUST_LOG`, falling back to `warn`.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
