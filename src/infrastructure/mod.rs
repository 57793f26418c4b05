//! External integrations: the durable key-value store and the OS clipboard.

pub mod clipboard;
pub mod store;

pub use clipboard::{Clipboard, SystemClipboard};
pub use store::{FileStore, MemoryStore, SessionStore, keys};
