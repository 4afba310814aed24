#![cfg(test)]
use crate::*;
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Tokenizes `line` and evaluates it against the default policy as line 1.
pub(crate) fn verdict(line: &str) -> Verdict {
    common_init();
    Policy::default().evaluate(&tokenize(line), 1, line)
}

