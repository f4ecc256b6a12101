//! Structured configuration issues.
//!
//! Loaders never reject a config file for a bad value: they report a
//! [`ConfigIssue`] and fall back to the built-in default for that entry.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `[theme.colors]` key that is not a style token
    UnknownStyleToken { name: String },
    /// Color name the terminal backend cannot resolve
    UnknownColor { token: String, value: String },
    /// Enum-like string field with an unrecognized value
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration. Every issue is a warning: the
/// offending entry is ignored and a default is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
