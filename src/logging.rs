//! Tracing subscriber setup for the `zt` binary.
//!
//! Logs go to stderr so stdout stays a clean report. `RUST_LOG` overrides the
//! level chosen from `-v` flags.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT_GUARD: OnceLock<()> = OnceLock::new();

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber once; later calls are no-ops.
pub fn init_tracing(verbosity: u8) {
    INIT_GUARD.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
        {
            eprintln!("failed to initialise tracing subscriber: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(5), "debug");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(0);
        init_tracing(2);
    }
}
