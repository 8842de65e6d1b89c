//! Persisted generation defaults.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pass::charset::{CharacterClass, ClassSet};
use crate::pass::request::GenerationRequest;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory on this platform")]
    NoConfigDir,

    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&file::default_path()?)
    }

    pub fn save_to_file(&self) -> Result<PathBuf, SettingsError> {
        let path = file::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = file::load(path)?;
        settings.length = clamp_length(settings.length);
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn classes(&self) -> ClassSet {
        let mut classes = ClassSet::new();
        classes.set(CharacterClass::Lowercase, self.lowercase);
        classes.set(CharacterClass::Uppercase, self.uppercase);
        classes.set(CharacterClass::Digit, self.digits);
        classes.set(CharacterClass::Symbol, self.symbols);
        classes
    }

    pub fn set_classes(&mut self, classes: ClassSet) {
        self.lowercase = classes.contains(CharacterClass::Lowercase);
        self.uppercase = classes.contains(CharacterClass::Uppercase);
        self.digits = classes.contains(CharacterClass::Digit);
        self.symbols = classes.contains(CharacterClass::Symbol);
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

/// Clamp a length into the accepted `[MIN_LENGTH, MAX_LENGTH]` range.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}
