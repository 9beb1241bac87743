//! Diagnostic logging
//!
//! Library code logs through `tracing`; the binary installs one stderr
//! subscriber at startup. `DECKHAND_LOG` takes `EnvFilter` directives and
//! wins over the `-v` count.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV_VAR: &str = "DECKHAND_LOG";

/// Filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter_from(env: Option<String>, verbose: u8) -> EnvFilter {
    env.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber writing to stderr
pub fn init(verbose: u8, ansi: bool) -> Result<(), TryInitError> {
    let filter = filter_from(std::env::var(LOG_ENV_VAR).ok(), verbose);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(verbose >= 2)
                .without_time()
                .compact(),
        )
        .try_init()
}
