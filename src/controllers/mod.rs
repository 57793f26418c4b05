//! Side-effectful orchestration: the two persistence streams and the
//! notification slot. Both are driven by an explicit clock so their timing
//! is deterministic under test.

pub mod notifier;
pub mod persistence;

pub use notifier::{NOTIFICATION_TTL, Notification, Notifier};
pub use persistence::{
    AUTO_SAVE_DEBOUNCE, ContentSaver, RestoredSession, load_session, save_settings,
};
