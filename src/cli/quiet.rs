//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings and confirmations, never errors.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin and stdout are both terminals.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 && libc::isatty(1) == 1 }
}

/// True when quiet mode is enabled or there is no terminal to prompt on.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
