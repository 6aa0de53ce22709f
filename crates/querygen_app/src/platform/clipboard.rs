//! System clipboard access via arboard.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable: {0}")]
    SystemUnavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteError(String),
}

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Holds the OS clipboard open for the life of the process. On X11 and
/// Wayland the owner must stay alive to keep serving the copied text.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    /// Opens the clipboard on first use. A failed copy drops the handle so
    /// the next copy reopens it.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()
                .map_err(|err| ClipboardError::SystemUnavailable(err.to_string()))?,
        };
        clipboard
            .set_text(text)
            .map_err(|err| ClipboardError::WriteError(err.to_string()))?;
        self.clipboard = Some(clipboard);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_is_kept_only_after_a_successful_copy() {
        // Headless hosts fail to open the clipboard; desktops succeed.
        let mut sink = SystemClipboard::default();
        for _ in 0..2 {
            match sink.copy("test") {
                Ok(()) => assert!(sink.clipboard.is_some()),
                Err(_) => assert!(sink.clipboard.is_none()),
            }
        }
    }
}
