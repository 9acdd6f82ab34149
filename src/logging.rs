//! Tracing setup: a persistent run log file plus optional console output.

use std::env;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// Events always land in the run log file (`SHOEBOX_LOG_FILE`, default
/// `shoebox.log` in the working directory). With `with_console` they are
/// mirrored to stderr as well; the TUI passes `false` so log output
/// cannot corrupt the alternate screen. Returns a guard that flushes the
/// file writer on drop.
pub fn init(with_console: bool) -> impl Drop {
    // Filter level comes from `SHOEBOX_LOG`, defaulting to `info`.
    let filter = env::var("SHOEBOX_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_layer = EnvFilter::new(filter);

    let log_file = env::var("SHOEBOX_LOG_FILE").unwrap_or_else(|_| "shoebox.log".to_string());
    let file_appender = tracing_appender::rolling::never(".", log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    let console_layer = with_console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
