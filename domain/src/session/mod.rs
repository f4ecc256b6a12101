//! Session-level notices shown through the host's notification channel

pub mod notice;

pub use notice::{NotifyLevel, SessionNotice};
