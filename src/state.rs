use std::time::Instant;

use crate::controllers::{ContentSaver, Notifier, load_session, save_settings};
use crate::domain::{Document, EditorSettings, Selection, ThemeMode, clamp_font_size};
use crate::error::Result;
use crate::infrastructure::{Clipboard, FileStore, SessionStore, SystemClipboard};
use crate::services::format::apply_format as format_text;
use crate::services::{
    ExportBlob, ExportFormat, FormatOp, TemplateKey, decode_import, export, insert_template,
    insert_template_by_name,
};

/// The editor coordinator: owns the document, selection, settings and
/// notification slot, and drives the persistence streams after every
/// mutation.
///
/// All time-dependent behavior (auto-save debounce, notification expiry) is
/// driven by the `now` arguments and [`EditorState::tick`]; the host calls
/// `tick` from its event loop.
pub struct EditorState<S: SessionStore, C: Clipboard> {
    document: Document,
    selection: Selection,
    settings: EditorSettings,
    notifier: Notifier,
    saver: ContentSaver,
    store: S,
    clipboard: C,
}

impl EditorState<FileStore, SystemClipboard> {
    /// Open against the default file-backed store and the OS clipboard.
    pub fn open_default() -> Self {
        Self::new(FileStore::open_default(), SystemClipboard::new())
    }
}

impl<S: SessionStore, C: Clipboard> EditorState<S, C> {
    /// Build the editor, restoring any previous session from `store`.
    ///
    /// Saved content is only loaded while auto-save is on (its default);
    /// otherwise the built-in welcome document is kept. Store read failures
    /// fall back to defaults.
    pub fn new(store: S, clipboard: C) -> Self {
        let restored = load_session(&store);

        let mut settings = EditorSettings::default();
        if let Some(theme) = restored.theme {
            settings.theme = theme;
        }
        if let Some(font_size) = restored.font_size {
            settings.font_size = font_size;
        }

        let mut document = Document::default();
        if let Some(file_name) = restored.file_name {
            document.file_name = file_name;
        }
        if settings.auto_save {
            if let Some(content) = restored.content {
                document.text = content;
            }
        }

        Self {
            document,
            selection: Selection::default(),
            settings,
            notifier: Notifier::new(),
            saver: ContentSaver::new(),
            store,
            clipboard,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// The live notification message, if one is unexpired at `now`.
    pub fn notification(&self, now: Instant) -> Option<&str> {
        self.notifier.current(now)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Advance the clock: expire the notification and flush a due
    /// auto-save.
    pub fn tick(&mut self, now: Instant) {
        self.notifier.tick(now);
        if self.settings.auto_save {
            self.saver
                .flush_due(&mut self.store, &self.document.text, now);
        }
    }

    /// Replace the whole buffer, e.g. from a free-form edit in the host's
    /// text widget.
    pub fn replace_text(&mut self, text: String, now: Instant) {
        self.document.text = text;
        self.selection = self.selection.clamped_to(&self.document.text);
        self.after_text_change(now);
    }

    /// Update the selection from the host's input focus, clamped into the
    /// current buffer.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped_to(&self.document.text);
    }

    // -- settings ---------------------------------------------------------

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.settings.theme = theme;
        self.persist_settings();
    }

    /// Switch to the next theme in the cycle and announce it.
    pub fn cycle_theme(&mut self, now: Instant) {
        self.settings.theme = self.settings.theme.next();
        self.persist_settings();
        self.notifier.notify(
            format!("🎨 {} theme activated!", self.settings.theme.display_name()),
            now,
        );
    }

    pub fn set_font_size(&mut self, size: u8) {
        self.settings.font_size = clamp_font_size(size);
        self.persist_settings();
    }

    pub fn set_show_line_numbers(&mut self, enabled: bool) {
        self.settings.show_line_numbers = enabled;
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        self.settings.word_wrap = enabled;
    }

    /// Enable or disable content auto-save. Session-only: the flag itself
    /// is never persisted. Disabling drops any pending save; enabling arms
    /// one for the current buffer.
    pub fn set_auto_save(&mut self, enabled: bool, now: Instant) {
        self.settings.auto_save = enabled;
        if enabled {
            self.saver.schedule(now);
        } else {
            self.saver.cancel();
        }
    }

    pub fn set_file_name(&mut self, file_name: String) {
        self.document.file_name = file_name;
        self.persist_settings();
    }

    // -- buffer operations ------------------------------------------------

    /// Apply an inline formatting operation to the current selection.
    pub fn apply_format(&mut self, op: FormatOp, now: Instant) -> Result<()> {
        let (text, selection) = format_text(&self.document.text, self.selection, op)?;
        self.document.text = text;
        self.selection = selection;
        self.after_text_change(now);
        Ok(())
    }

    /// Append a template snippet to the end of the buffer. The selection is
    /// left where it was.
    pub fn insert_template(&mut self, key: TemplateKey, now: Instant) {
        self.document.text = insert_template(&self.document.text, key);
        self.after_text_change(now);
    }

    /// Append a template looked up by its string name, failing on unknown
    /// names instead of splicing garbage.
    pub fn insert_template_by_name(&mut self, name: &str, now: Instant) -> Result<()> {
        self.document.text = insert_template_by_name(&self.document.text, name)?;
        self.after_text_change(now);
        Ok(())
    }

    /// Empty the buffer, or report that it already is.
    pub fn clear(&mut self, now: Instant) {
        if self.document.text.trim().is_empty() {
            self.notifier.notify("ℹ️ Editor is already empty!", now);
            return;
        }
        self.document.text.clear();
        self.selection = Selection::default();
        self.after_text_change(now);
        self.notifier.notify("🗑️ Editor cleared!", now);
    }

    /// Replace the buffer with an imported file's decoded content.
    ///
    /// On a decode failure the document and selection are untouched and the
    /// failure is reported through the notification slot.
    pub fn import(&mut self, bytes: &[u8], file_name: &str, now: Instant) -> Result<()> {
        let text = match decode_import(bytes) {
            Ok(text) => text,
            Err(e) => {
                self.notifier.notify("❌ File upload error!", now);
                return Err(e);
            }
        };

        self.document.text = text;
        self.document.file_name = file_name.to_string();
        self.selection = self.selection.clamped_to(&self.document.text);
        self.persist_settings();
        self.after_text_change(now);
        self.notifier
            .notify(format!("📂 {file_name} uploaded successfully!"), now);
        Ok(())
    }

    /// Serialize the document for the given target format.
    pub fn export(&mut self, format: ExportFormat, now: Instant) -> Result<ExportBlob> {
        let blob = export(&self.document, format)?;
        let message = match format {
            ExportFormat::Markdown => "💾 Markdown file downloaded successfully!",
            ExportFormat::Html => "🌐 HTML file downloaded successfully!",
            ExportFormat::PlainText => "📄 Text file downloaded successfully!",
        };
        self.notifier.notify(message, now);
        Ok(blob)
    }

    /// Copy the whole buffer to the clipboard, reporting either outcome.
    pub fn copy_to_clipboard(&mut self, now: Instant) -> Result<()> {
        match self.clipboard.set_text(&self.document.text) {
            Ok(()) => {
                self.notifier.notify("📋 Markdown copied successfully!", now);
                Ok(())
            }
            Err(e) => {
                self.notifier.notify("❌ Copy error!", now);
                Err(e)
            }
        }
    }

    // -- internals --------------------------------------------------------

    fn persist_settings(&mut self) {
        save_settings(
            &mut self.store,
            self.settings.theme,
            self.settings.font_size,
            &self.document.file_name,
        );
    }

    fn after_text_change(&mut self, now: Instant) {
        if self.settings.auto_save {
            self.saver.schedule(now);
        }
    }
}
