//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types.

mod notice;
mod render;
mod scalar;
mod theme;

pub use notice::FileNoticeConfig;
pub use render::FileRenderConfig;
pub use theme::FileThemeConfig;

use collapse_application::OverlayConfig;
use collapse_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session notice settings
    pub notice: FileNoticeConfig,
    /// Result rendering settings
    pub render: FileRenderConfig,
    /// Terminal theme settings
    pub theme: FileThemeConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks enum-like string fields and theme token names. Color names
    /// are checked by the theme that resolves them.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.notice.parse_level().1);
        issues.extend(self.theme.parse_colors().1);
        issues
    }

    /// Convert to the application's overlay settings
    pub fn to_overlay_config(&self) -> OverlayConfig {
        OverlayConfig::default()
            .with_running_indicator(self.render.running_indicator.clone())
            .with_notice(self.notice.to_notice())
    }
}
