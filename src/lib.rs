//! Markdown editing core: buffer state, selection-aware formatting,
//! template insertion, import/export and session persistence.
//!
//! The crate is the engine behind a Markdown editor, not the editor itself.
//! It owns the text buffer and everything that mutates it; rendering the
//! buffer to HTML and laying out panels belongs to the host, as does
//! delivering exported bytes to the user.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Selection, EditorSettings)
//! - `services/` - Pure buffer operations (formatting, templates, export)
//! - `infrastructure/` - External integrations (session store, clipboard)
//! - `controllers/` - Side-effectful orchestration (persistence streams, notifications)
//! - `state.rs` - Main editor coordinator
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use markpad::{EditorState, FormatOp, MemoryStore, Selection, SystemClipboard};
//!
//! let now = Instant::now();
//! let mut editor = EditorState::new(MemoryStore::new(), SystemClipboard::new());
//!
//! editor.replace_text("make this bold".to_string(), now);
//! editor.set_selection(Selection::new(5, 9));
//! editor.apply_format(FormatOp::Bold, now).unwrap();
//! assert_eq!(editor.document().text, "make **this** bold");
//! ```

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{NOTIFICATION_TTL, Notification, Notifier};
pub use domain::{Document, EditorSettings, Selection, ThemeMode, WELCOME_TEXT};
pub use error::{EditorError, Result};
pub use infrastructure::{Clipboard, FileStore, MemoryStore, SessionStore, SystemClipboard};
pub use services::{ExportBlob, ExportFormat, FormatOp, TemplateKey};
pub use state::EditorState;
