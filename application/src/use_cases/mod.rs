//! Use cases of the overlay.
//!
//! - [`adapt_tool`]: wrap a host tool with the collapsed renderers
//! - [`session_notifier`]: one informational notice per session start
//! - [`activate`]: build, adapt and register the seven built-in tools

pub mod activate;
pub mod adapt_tool;
pub mod session_notifier;
