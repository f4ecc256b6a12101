//! Notice configuration from TOML (`[notice]` section)

use super::scalar::lenient_string;
use collapse_domain::session::notice::DEFAULT_NOTICE;
use collapse_domain::{ConfigIssue, ConfigIssueCode, NotifyLevel, SessionNotice};
use serde::{Deserialize, Serialize};

/// Raw session notice configuration
///
/// # Example
///
/// ```toml
/// [notice]
/// enabled = true
/// message = "Collapse Tools: outputs hidden (Cmd+O to expand)"
/// level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNoticeConfig {
    /// Show the notice on session start
    pub enabled: bool,
    /// Notice text
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
    /// "info", "warning" or "error"
    #[serde(deserialize_with = "lenient_string")]
    pub level: String,
}

impl Default for FileNoticeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            message: DEFAULT_NOTICE.to_string(),
            level: NotifyLevel::Info.as_str().to_string(),
        }
    }
}

impl FileNoticeConfig {
    /// Parse the level, falling back to `info` with a warning
    pub fn parse_level(&self) -> (NotifyLevel, Vec<ConfigIssue>) {
        match self.level.parse::<NotifyLevel>() {
            Ok(level) => (level, vec![]),
            Err(_) => (
                NotifyLevel::Info,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "notice.level".to_string(),
                        value: self.level.clone(),
                        valid_values: vec![
                            "info".to_string(),
                            "warning".to_string(),
                            "error".to_string(),
                        ],
                    },
                    format!(
                        "notice.level: unknown value '{}', falling back to 'info'",
                        self.level
                    ),
                )],
            ),
        }
    }

    /// The notice to show, or `None` when disabled
    pub fn to_notice(&self) -> Option<SessionNotice> {
        if !self.enabled {
            return None;
        }
        Some(SessionNotice {
            message: self.message.clone(),
            level: self.parse_level().0,
        })
    }
}
