//! Setup and initialization functions for CLI
//!
//! This module contains functions for initializing the runtime environment:
//! logging and terminal color detection.

use log::LevelFilter;
use std::io::IsTerminal;

/// Map `-v` repetitions to a log level
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger once at startup. `RUST_LOG` overrides `verbosity`.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .parse_default_env();

    if let Err(e) = builder.try_init() {
        // Already configured - this is fine, just ignore
        eprintln!("Note: Logger already configured: {}", e);
    }
}

/// Whether terminal output should be colored
pub fn use_color(plain: bool) -> bool {
    !plain && std::io::stdout().is_terminal()
}
