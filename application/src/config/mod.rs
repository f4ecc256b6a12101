//! Application-level configuration.
//!
//! - [`OverlayConfig`]: running indicator text and the session notice

pub mod overlay_config;

pub use overlay_config::{DEFAULT_RUNNING_INDICATOR, OverlayConfig};
