use crate::error::{EditorError, Result};

/// Seam over the OS clipboard so the editor can be tested without one.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// OS clipboard backed by `arboard`.
///
/// Construction is best effort: `arboard` can fail in headless or unusual
/// environments, in which case every copy reports failure instead of
/// panicking.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = arboard::Clipboard::new().ok();
        if inner.is_none() {
            log::warn!("system clipboard unavailable; copy operations will fail");
        }
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|_| EditorError::ClipboardUnavailable),
            None => Err(EditorError::ClipboardUnavailable),
        }
    }
}
