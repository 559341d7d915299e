//! Clipboard access for copying the edited reply

use anyhow::{Result, anyhow};
use arboard::Clipboard;

/// Destination for copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard. Initialization failures (e.g. no display server) are
/// logged and every later copy reports the clipboard as unavailable.
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::warn!("Failed to initialize clipboard: {}", e);
                None
            }
        };
        Self { clipboard }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| anyhow!("no system clipboard"))?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// In-memory clipboard that records every copy
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn last(&self) -> Option<String> {
        self.contents.lock().ok()?.last().cloned()
    }
}

#[cfg(test)]
impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}
