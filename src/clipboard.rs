//! System clipboard access shared by the CLI and the panel.

use copypasta::{ClipboardContext, ClipboardProvider};

pub type Clipboard = Box<dyn ClipboardProvider>;

/// Open the system clipboard.
pub fn open() -> Result<Clipboard, String> {
    ClipboardContext::new()
        .map(|ctx| Box::new(ctx) as Clipboard)
        .map_err(|e| e.to_string())
}
