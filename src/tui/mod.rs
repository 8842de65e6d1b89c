//! Interactive terminal panel.

mod panel;
mod view;

use std::process::ExitCode;

use copypasta::ClipboardProvider;
use log::{debug, warn};

use charpass::settings::Settings;

use crate::cli::prompts;
use crate::clipboard::{self, Clipboard};
use crate::terminal::{clear, read_key, reset_terminal};

pub use panel::{Command, Effect, Panel};

/// Run the interactive panel until the user quits.
pub fn run() -> ExitCode {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("failed to load settings: {e}");
        Settings::default()
    });
    let mut panel = Panel::new(settings);
    let mut clipboard: Option<Clipboard> = None;

    let code = loop {
        view::draw(&panel);

        let key = match read_key() {
            Ok(key) => key,
            Err(e) => {
                reset_terminal();
                prompts::error(&format!("Cannot read from terminal: {e}"));
                break ExitCode::FAILURE;
            }
        };
        let Some(cmd) = Command::from_key(key) else {
            continue;
        };

        match panel.apply(cmd) {
            Effect::Redraw => {}
            Effect::Quit => break ExitCode::SUCCESS,
            Effect::Copy => copy(&mut panel, &mut clipboard),
            Effect::Save => match panel.settings.save_to_file() {
                Ok(path) => panel.set_info(format!("Defaults saved \u{2192} {}", path.display())),
                Err(e) => panel.set_error(format!("Failed to save settings: {e}")),
            },
        }
    };

    clear();
    reset_terminal();
    code
}

/// Copy the shown password. The only owned copy is the one handed to
/// the clipboard.
fn copy(panel: &mut Panel, clipboard: &mut Option<Clipboard>) {
    if panel.password().is_none() {
        return;
    }

    if clipboard.is_none() {
        match clipboard::open() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => {
                debug!("clipboard init failed: {e}");
                panel.set_error(format!("Clipboard unavailable: {e}"));
                return;
            }
        }
    }

    let result = match (clipboard.as_mut(), panel.password()) {
        (Some(ctx), Some(pass)) => ctx.set_contents(pass.to_owned()),
        _ => return,
    };
    match result {
        Ok(()) => panel.set_info("Password copied to clipboard!"),
        Err(e) => panel.set_error(format!("Clipboard error: {e}")),
    }
}
