//! Root logger construction for the binary.
//!
//! Library code never builds its own logger; it takes a `&slog::Logger`.
//! Tests pass one rooted at `slog::Discard`.

use std::io;

use slog::{o, Discard, Drain, Level, LevelFilter, Logger};

/// Maps `-v` occurrences to a level. `None` means logging is off (`-q`).
#[must_use]
pub fn level_for(verbosity: u8, quiet: bool) -> Option<Level> {
    if quiet {
        return None;
    }
    Some(match verbosity {
        0 => Level::Warning,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    })
}

/// Builds a logger that writes human-readable records to stderr.
///
/// Passing `None` yields a logger that discards everything.
#[must_use]
pub fn build_logger(level: Option<Level>) -> Logger {
    let Some(level) = level else {
        return discard();
    };
    let decorator = slog_term::PlainSyncDecorator::new(io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!("app" => env!("CARGO_PKG_NAME")))
}

/// A logger that drops every record.
#[must_use]
pub fn discard() -> Logger {
    Logger::root(Discard, o!())
}
