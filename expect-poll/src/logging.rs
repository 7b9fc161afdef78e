//! Development-time tracing for debugging assertion polling.
//!
//! The poll loop emits `debug` events per attempt and the entry point logs
//! the terminal verdict. Nothing here affects outcomes or messages.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format. Panics if a global subscriber is already
/// installed; use [`try_init`] where that can happen.
///
/// # Example
/// ```bash
/// RUST_LOG=expect_poll=debug cargo test -p expect-poll
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

/// Like [`init`], but writes through the test harness capture and tolerates
/// an already-installed subscriber.
///
/// Test binaries call this from many tests; only the first call installs.
/// Returns whether this call installed the subscriber.
pub fn try_init() -> bool {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_test_writer().compact())
        .try_init()
        .is_ok()
}

fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
