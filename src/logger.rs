//! Logging utilities with colored output.
//!
//! Provides the `log!` macro for formatted terminal output with colored
//! module prefixes, and `debug!` for messages gated behind `--verbose`.
//!
//! # Example
//!
//! ```ignore
//! log!("diff"; "{} missing, {} stale", missing, stale);
//! debug!("merge"; "writing {}", path.display());
//! ```

use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Print a message with its module prefix. Prefer the `log!` macro.
pub fn log(module: &str, message: &str) {
    match module {
        "error" => eprintln!("{} {}", "error:".red().bold(), message),
        "warning" => eprintln!("{} {}", "warning:".yellow().bold(), message),
        "hint" => eprintln!("{} {}", "hint:".yellow(), message),
        _ => eprintln!("{} {}", format!("[{module}]").cyan(), message),
    }
}
