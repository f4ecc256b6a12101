//! Configuration file loading for collapse-tools
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COLLAPSE_TOOLS_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./collapse-tools.toml` or `./.collapse-tools.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/collapse-tools/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileNoticeConfig, FileRenderConfig, FileThemeConfig};
pub use loader::ConfigLoader;
