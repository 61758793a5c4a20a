//! Logging initialization.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary. Logs always go to stderr so record lines on stdout stay
//! clean.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `roster=trace`.
pub const LOG_ENV: &str = "ROSTER_LOG";

static INIT_ONCE: Once = Once::new();

/// Default directive when `ROSTER_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "roster=debug"
    } else {
        "roster=warn"
    }
}

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(false);
        init(true);
        init(false);
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "roster=warn");
        assert_eq!(default_directive(true), "roster=debug");
    }
}
