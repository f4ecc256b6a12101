//! Render configuration from TOML (`[render]` section)

use super::scalar::lenient_string;
use collapse_application::config::DEFAULT_RUNNING_INDICATOR;
use serde::{Deserialize, Serialize};

/// Raw render configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRenderConfig {
    /// Text shown while a tool is still running
    #[serde(deserialize_with = "lenient_string")]
    pub running_indicator: String,
}

impl Default for FileRenderConfig {
    fn default() -> Self {
        Self {
            running_indicator: DEFAULT_RUNNING_INDICATOR.to_string(),
        }
    }
}
