//! Core data structures: the document buffer, the selection range and the
//! display settings.

pub mod document;
pub mod settings;

pub use document::{DEFAULT_FILE_NAME, Document, Selection, WELCOME_TEXT};
pub use settings::{
    EditorSettings, MAX_FONT_SIZE, MIN_FONT_SIZE, ThemeMode, clamp_font_size,
};
