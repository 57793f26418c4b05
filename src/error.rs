use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("imported file is not valid UTF-8")]
    ImportFailed,

    #[error("session store error: {0}")]
    Store(String),

    #[error("clipboard unavailable")]
    ClipboardUnavailable,

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("selection {start}..{end} is not valid for a buffer of {len} bytes")]
    InvalidSelection {
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Convenience type alias for Results with EditorError
pub type Result<T> = std::result::Result<T, EditorError>;
