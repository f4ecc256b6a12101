//! The one-time notice announcing that tool output is collapsed

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default text of the session-start notice
pub const DEFAULT_NOTICE: &str = "Collapse Tools: outputs hidden (Cmd+O to expand)";

/// Notification level understood by the host UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl NotifyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyLevel::Info => "info",
            NotifyLevel::Warning => "warning",
            NotifyLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotifyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(NotifyLevel::Info),
            "warning" | "warn" => Ok(NotifyLevel::Warning),
            "error" => Ok(NotifyLevel::Error),
            _ => Err(DomainError::UnknownNotifyLevel(s.to_string())),
        }
    }
}

/// A message to surface once when a session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionNotice {
    pub message: String,
    pub level: NotifyLevel,
}

impl Default for SessionNotice {
    fn default() -> Self {
        Self {
            message: DEFAULT_NOTICE.to_string(),
            level: NotifyLevel::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_notice() {
        let notice = SessionNotice::default();
        assert_eq!(notice.message, "Collapse Tools: outputs hidden (Cmd+O to expand)");
        assert_eq!(notice.level, NotifyLevel::Info);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("info".parse::<NotifyLevel>(), Ok(NotifyLevel::Info));
        assert_eq!("WARN".parse::<NotifyLevel>(), Ok(NotifyLevel::Warning));
        assert_eq!("error".parse::<NotifyLevel>(), Ok(NotifyLevel::Error));
        assert!("loud".parse::<NotifyLevel>().is_err());
    }
}
