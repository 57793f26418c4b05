use std::time::{Duration, Instant};

use crate::domain::{ThemeMode, clamp_font_size};
use crate::infrastructure::{SessionStore, keys};

/// Quiet window before buffer content is written to the store. A new edit
/// inside the window restarts it, so only the final state of a burst of
/// edits is persisted.
pub const AUTO_SAVE_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Values restored from the store at startup. Absent or unparseable entries
/// are `None`; the caller falls back to defaults.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RestoredSession {
    pub theme: Option<ThemeMode>,
    pub font_size: Option<u8>,
    pub content: Option<String>,
    pub file_name: Option<String>,
}

/// Read all four session keys. Failures are logged and treated as absent,
/// never surfaced: a broken store must not block editing.
pub fn load_session(store: &dyn SessionStore) -> RestoredSession {
    let read = |key: &str| match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("session store read failed for {key}: {e}");
            None
        }
    };

    let theme = read(keys::THEME).and_then(|v| ThemeMode::from_storage_key(&v));
    let font_size = read(keys::FONT_SIZE)
        .and_then(|v| v.parse::<u8>().ok())
        .map(clamp_font_size);

    RestoredSession {
        theme,
        font_size,
        content: read(keys::CONTENT),
        file_name: read(keys::FILE_NAME),
    }
}

/// Write the three settings keys immediately, best effort. A store failure
/// is logged and swallowed; the user keeps editing.
pub fn save_settings(
    store: &mut dyn SessionStore,
    theme: ThemeMode,
    font_size: u8,
    file_name: &str,
) {
    let writes = [
        (keys::THEME, theme.storage_key().to_string()),
        (keys::FONT_SIZE, font_size.to_string()),
        (keys::FILE_NAME, file_name.to_string()),
    ];
    for (key, value) in writes {
        if let Err(e) = store.set(key, &value) {
            log::warn!("session store write failed for {key}: {e}");
        }
    }
}

/// Debounced content-save stream.
///
/// Holds at most one pending deadline; each triggering edit cancels it and
/// arms a fresh one, giving last-write-wins semantics. The owner drives it
/// from its tick with the content to persist.
#[derive(Debug, Default)]
pub struct ContentSaver {
    deadline: Option<Instant>,
}

impl ContentSaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the save deadline after an edit at `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + AUTO_SAVE_DEBOUNCE);
    }

    /// Drop any pending save, e.g. when auto-save is switched off.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Write `content` if the quiet window has elapsed. Returns whether a
    /// write was attempted. Store failures are logged and swallowed.
    pub fn flush_due(&mut self, store: &mut dyn SessionStore, content: &str, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if let Err(e) = store.set(keys::CONTENT, content) {
                    log::warn!("auto-save failed: {e}");
                }
                true
            }
            _ => false,
        }
    }
}
