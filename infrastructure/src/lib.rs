//! Infrastructure layer for collapse-tools
//!
//! This crate contains the adapters that read the outside world:
//! configuration file discovery, merging and validation.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileNoticeConfig, FileRenderConfig, FileThemeConfig,
};
