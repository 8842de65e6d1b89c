//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use copypasta::ClipboardProvider;
use log::{debug, warn};
use thiserror::Error;
use zeroize::Zeroizing;

use charpass::Error;
use charpass::settings::Settings;

use super::{Args, prompts, quiet};
use crate::clipboard::{self, Clipboard};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] Error),

    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// 2 for configuration mistakes the user can fix, 1 for everything else.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Generate(e) if e.is_config() => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }

    pub fn report(&self) {
        match self {
            CliError::Generate(Error::NoClassSelected) => prompts::no_class_selected(),
            other => prompts::error(&other.to_string()),
        }
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    clipboard: Option<Clipboard>,
    settings_path: Option<PathBuf>,
    args: Args,
}

impl Context {
    /// Context over the saved defaults in the user's config directory.
    pub fn new(args: Args) -> Self {
        quiet::set(args.quiet);
        Self::with_settings(args, load_settings())
    }

    /// Context over explicit defaults, with `args` applied on top.
    pub fn with_settings(args: Args, mut settings: Settings) -> Self {
        args.apply(&mut settings);
        Self {
            settings,
            clipboard: None,
            settings_path: None,
            args,
        }
    }

    /// Save to `path` instead of the default settings file.
    pub fn settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    /// Use an already opened clipboard for `-b`.
    pub fn clipboard(mut self, clipboard: Clipboard) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Run CLI against stdout.
    pub fn run(&mut self) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run CLI. Declining the clipboard fallback ends the run successfully.
    pub fn run_to<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        self.handle_save()?;
        if self.args.clipboard && self.clipboard.is_none() && !self.open_clipboard() {
            return Ok(());
        }
        self.generate_output(out)
    }

    fn handle_save(&self) -> Result<(), CliError> {
        if !self.args.save {
            return Ok(());
        }
        if self.settings.classes().is_empty() {
            return Err(Error::NoClassSelected.into());
        }
        let saved = match &self.settings_path {
            Some(path) => self.settings.save_to(path).map(|()| path.clone()),
            None => self.settings.save_to_file(),
        };
        match saved {
            Ok(path) => prompts::settings_saved(&path),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
        Ok(())
    }

    /// Returns false if the clipboard is unavailable and the user aborted.
    fn open_clipboard(&mut self) -> bool {
        match clipboard::open() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                warn!("clipboard unavailable: {e}");
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    /// Generate passwords to the clipboard, or to `out` when there is no
    /// clipboard or writing to it fails.
    pub fn generate_output<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        let request = self.settings.request();
        let count = self.args.number as usize;
        debug!("generating {count} password(s)");

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut passwords = Zeroizing::new(String::new());
            for _ in 0..count {
                let pass = Zeroizing::new(request.generate()?);
                if !passwords.is_empty() {
                    passwords.push('\n');
                }
                passwords.push_str(&pass);
            }

            match ctx.set_contents((*passwords).clone()) {
                Ok(()) => {
                    if let Ok(retrieved) = ctx.get_contents() {
                        drop(Zeroizing::new(retrieved));
                    }
                    prompts::clipboard_copied(count);
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    prompts::warn("Printing to terminal instead.");
                    out.write_all(passwords.as_bytes())?;
                    out.write_all(b"\n")?;
                    out.flush()?;
                }
            }
            return Ok(());
        }

        for _ in 0..count {
            let mut line = Zeroizing::new(request.generate()?);
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }
}

fn load_settings() -> Settings {
    Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    })
}
