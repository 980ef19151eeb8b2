//! Tracing/logging initialization.
//!
//! Logs are JSON lines on stderr so stdout stays reserved for report output.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with `default_directive` as the filter when `RUST_LOG`
/// is unset or unparsable.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with_default(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init_with_default("warn");
        assert!(!init_with_default("debug"));
    }
}
