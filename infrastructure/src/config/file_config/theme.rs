//! Theme configuration from TOML (`[theme]` section)

use collapse_domain::{ConfigIssue, ConfigIssueCode, StyleToken};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw theme configuration
///
/// Color names are resolved by the terminal backend; only the token names
/// are checked here.
///
/// # Example
///
/// ```toml
/// [theme]
/// color = true
///
/// [theme.colors]
/// toolTitle = "bright white"
/// toolDiffAdded = "green"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileThemeConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Style token name -> color name overrides
    pub colors: BTreeMap<String, String>,
}

impl Default for FileThemeConfig {
    fn default() -> Self {
        Self {
            color: true,
            colors: BTreeMap::new(),
        }
    }
}

impl FileThemeConfig {
    /// Overrides keyed by style token; unknown token names are reported and
    /// skipped.
    pub fn parse_colors(&self) -> (BTreeMap<StyleToken, String>, Vec<ConfigIssue>) {
        let mut colors = BTreeMap::new();
        let mut issues = Vec::new();

        for (name, color) in &self.colors {
            match name.parse::<StyleToken>() {
                Ok(token) => {
                    colors.insert(token, color.clone());
                }
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownStyleToken { name: name.clone() },
                    format!("theme.colors: unknown style token '{}', ignored", name),
                )),
            }
        }

        (colors, issues)
    }
}
