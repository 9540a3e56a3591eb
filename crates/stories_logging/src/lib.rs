#![deny(missing_docs)]
//! Shared logging utilities for the stories workspace.
//!
//! Every crate logs through the `stories_*` macros below so that all output
//! lands under the single `stories` target, regardless of which module emitted
//! it. The binary installs a real logger; tests use [`initialize_for_tests`].

use std::sync::Once;

#[doc(hidden)]
pub use log;

/// Log target shared by every `stories_*` macro.
pub const TARGET: &str = "stories";

/// Logs a trace-level message under the `stories` target.
#[macro_export]
macro_rules! stories_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the `stories` target.
#[macro_export]
macro_rules! stories_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the `stories` target.
#[macro_export]
macro_rules! stories_info {
    ($($arg:tt)*) => {{
        $crate::log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the `stories` target.
#[macro_export]
macro_rules! stories_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the `stories` target.
#[macro_export]
macro_rules! stories_error {
    ($($arg:tt)*) => {{
        $crate::log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Initializes a terminal logger for use in tests.
///
/// Safe to call from every test: only the first call installs a logger, and a
/// logger installed elsewhere is left in place.
pub fn initialize_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        // Use debug level in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}
