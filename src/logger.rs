//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `status_*` helpers for one-line outcome messages
//!
//! Everything goes to stderr; stdout is reserved for generated artifacts so
//! they can be piped or redirected.
//!
//! # Example
//!
//! ```ignore
//! log!("write"; "{}", path.display());
//! debug!("share"; "ignoring shared config: {}", err);
//! status_warning("Title is over about 60 chars.");
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

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

// ============================================================================
// Log Macro
// ============================================================================

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
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Style text for stderr, honoring `--color` and terminal detection.
fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stderr, |t| style.style(t))
        .to_string()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "write" | "share" => Style::new().bright_blue(),
        "error" => Style::new().bright_red(),
        "warning" => Style::new().bright_yellow(),
        _ => Style::new().bright_green(),
    };
    paint(&prefix, style.bold())
}

// ============================================================================
// Status lines
// ============================================================================

/// Kind of outcome shown by a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl Status {
    fn symbol(self) -> String {
        match self {
            Status::Success => paint("✓", Style::new().green()),
            Status::Warning => paint("⚠", Style::new().yellow()),
            Status::Error => paint("✗", Style::new().red()),
        }
    }
}

/// Format a status line with optional indented detail.
fn format_status(status: Status, summary: &str, detail: &str) -> String {
    if detail.is_empty() {
        format!("{} {summary}", status.symbol())
    } else {
        let detail = paint(detail, Style::new().dimmed());
        format!("{} {summary}\n  {detail}", status.symbol())
    }
}

fn print_status(status: Status, summary: &str, detail: &str) {
    let mut stderr = stderr().lock();
    writeln!(stderr, "{}", format_status(status, summary, detail)).ok();
    stderr.flush().ok();
}

/// Status line: success (✓ prefix, green).
pub fn status_success(message: &str) {
    print_status(Status::Success, message, "");
}

/// Status line: warning (⚠ prefix, yellow).
pub fn status_warning(message: &str) {
    print_status(Status::Warning, message, "");
}

/// Status line: error (✗ prefix, red) with optional detail.
pub fn status_error(summary: &str, detail: &str) {
    print_status(Status::Error, summary, detail);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("write", "write"), "[write]");
        assert_eq!(colorize_prefix("Share", "share"), "[Share]");
    }

    #[test]
    fn test_status_format_plain() {
        owo_colors::set_override(false);
        assert_eq!(format_status(Status::Success, "wrote 4 files", ""), "✓ wrote 4 files");
        assert_eq!(format_status(Status::Warning, "long title", ""), "⚠ long title");
    }

    #[test]
    fn test_status_format_with_detail() {
        owo_colors::set_override(false);
        let line = format_status(Status::Error, "invalid share link", "no config token found");
        assert_eq!(line, "✗ invalid share link\n  no config token found");
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_verbose_flag() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
