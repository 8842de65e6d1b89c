//! Raw mode guard and single-key input.

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Disables raw mode when dropped, including on early return or panic.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    pub fn disable(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Block until a key is pressed and return it. Raw mode is held only for
/// the duration of the read so regular `println!` output stays intact.
pub fn read_key() -> io::Result<KeyEvent> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(key);
        }
    }
}
