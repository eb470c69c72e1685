//! Logging setup.
//!
//! Log output goes to stderr so that stdout carries only the estimate and
//! can be piped. The filter is read from `ADREACH_LOG` (standard
//! `EnvFilter` syntax, e.g. `ADREACH_LOG=adreach=trace`); without it the
//! `-v` count picks the level.
//!
//! ```ignore
//! use adreach::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli.verbose);
//!     // ... rest of application
//! }
//! ```

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV_VAR: &str = "ADREACH_LOG";

static INIT: Once = Once::new();

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "adreach=warn",
        1 => "adreach=info",
        2 => "adreach=debug",
        _ => "adreach=trace",
    }
}

/// Initialize the tracing subscriber. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}
