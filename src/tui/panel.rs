//! Interactive panel state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroize;

use charpass::settings::{MAX_LENGTH, MIN_LENGTH, Settings, clamp_length};
use charpass::{CharacterClass, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Toggle(CharacterClass),
    Longer(usize),
    Shorter(usize),
    Copy,
    Save,
    Quit,
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let cmd = match key.code {
            KeyCode::Char('c') if ctrl => Command::Quit,
            KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
            KeyCode::Enter | KeyCode::Char('g') => Command::Generate,
            KeyCode::Char('1') => Command::Toggle(CharacterClass::Lowercase),
            KeyCode::Char('2') => Command::Toggle(CharacterClass::Uppercase),
            KeyCode::Char('3') => Command::Toggle(CharacterClass::Digit),
            KeyCode::Char('4') => Command::Toggle(CharacterClass::Symbol),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Command::Longer(1),
            KeyCode::Char('-') | KeyCode::Left => Command::Shorter(1),
            KeyCode::Up => Command::Longer(10),
            KeyCode::Down => Command::Shorter(10),
            KeyCode::Char('c') => Command::Copy,
            KeyCode::Char('s') => Command::Save,
            _ => return None,
        };
        Some(cmd)
    }
}

/// What the event loop has to do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Copy,
    Save,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Info(String),
    Error(String),
}

pub struct Panel {
    pub settings: Settings,
    password: Option<String>,
    status: Status,
}

impl Panel {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            password: None,
            status: Status::Idle,
        }
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn set_info(&mut self, msg: impl Into<String>) {
        self.status = Status::Info(msg.into());
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status = Status::Error(msg.into());
    }

    pub fn apply(&mut self, cmd: Command) -> Effect {
        match cmd {
            Command::Generate => self.generate(),
            Command::Toggle(class) => {
                let mut classes = self.settings.classes();
                classes.toggle(class);
                self.settings.set_classes(classes);
                self.status = Status::Idle;
            }
            Command::Longer(step) => {
                self.settings.length = clamp_length(self.settings.length.saturating_add(step));
            }
            Command::Shorter(step) => {
                self.settings.length = clamp_length(self.settings.length.saturating_sub(step));
            }
            // Nothing to copy before the first successful generation.
            Command::Copy if self.password.is_none() => return Effect::Redraw,
            Command::Copy => return Effect::Copy,
            Command::Save if self.settings.classes().is_empty() => {
                self.set_error("Select at least one character type before saving.");
            }
            Command::Save => return Effect::Save,
            Command::Quit => return Effect::Quit,
        }
        Effect::Redraw
    }

    fn generate(&mut self) {
        self.clear_password();
        match self.settings.request().generate() {
            Ok(pass) => {
                self.password = Some(pass);
                self.status = Status::Idle;
            }
            Err(Error::NoClassSelected) => {
                self.set_error("Please select at least one character type.");
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn clear_password(&mut self) {
        if let Some(mut old) = self.password.take() {
            old.zeroize();
        }
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.clear_password();
    }
}

pub fn length_hint() -> String {
    format!("{MIN_LENGTH}-{MAX_LENGTH}")
}
