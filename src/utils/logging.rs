//! Tracing subscriber setup.
//!
//! The CLI calls [`init_logging`] once before dispatching a command. Tests may
//! call it too; only the first call installs a subscriber.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Install the global `tracing` subscriber.
///
/// When `level` is `Some`, it wins over `RUST_LOG`. Otherwise `RUST_LOG` is
/// honored and `info` is used when it is unset or unparsable.
///
/// ```bash
/// RUST_LOG=hdrgen_cli=debug hdrgen amalgamate boost/leaf
/// ```
pub fn init_logging(level: Option<&str>) {
    INIT_LOGGING.call_once(|| {
        let filter = match level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init();
    });
}
