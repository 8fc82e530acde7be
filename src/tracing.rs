//! Tracing initialization for the CLI.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Defaults to `info` so index build summaries show up; per-record
/// rejection warnings ride on the same subscriber. `RUST_LOG` overrides
/// the filter as usual. Logs go to stderr so piped search output stays
/// clean.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        // A second call must neither panic nor re-register a subscriber
        super::init();
        super::init();
    }
}
