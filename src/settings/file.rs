//! Settings file persistence (TOML).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::{Settings, SettingsError};

pub fn default_path() -> Result<PathBuf, SettingsError> {
    dirs::config_dir()
        .map(|dir| dir.join("charpass").join("settings.toml"))
        .ok_or(SettingsError::NoConfigDir)
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!("loaded settings from {}", path.display());
            Ok(toml::from_str(&text)?)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string(settings)?)?;
    debug!("saved settings to {}", path.display());
    Ok(())
}
