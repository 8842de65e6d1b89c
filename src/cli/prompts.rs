//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn no_class_selected() {
    error("Please select at least one character type.");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            eprintln!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            eprintln!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Quiet or non-interactive sessions fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Defaults saved \u{2192} {}", path.display());
    }
}
