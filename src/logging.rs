//! Diagnostic output on stderr.
//!
//! Skipped lines and truncated timestamps are reported through [`tracing`];
//! this installs the subscriber that prints them.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic filter.
pub const LOG_ENV: &str = "ZEEK_CUT_LOG";

/// Install a compact stderr subscriber.
///
/// The filter comes from `ZEEK_CUT_LOG` (e.g. `ZEEK_CUT_LOG=debug`) and
/// defaults to warnings only.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
