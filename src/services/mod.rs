//! Pure business operations over the document buffer. Everything here is a
//! plain function from old text to new text so it can be tested without any
//! editor state.

pub mod export;
pub mod format;
pub mod template;

pub use export::{ExportBlob, ExportFormat, decode_import, escape_html, export, rewrite_extension};
pub use format::{FormatOp, apply_format};
pub use template::{TemplateKey, insert_template, insert_template_by_name};
