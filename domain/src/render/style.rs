//! Named style tokens resolved by the host theme

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A semantic style slot. The theme decides the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleToken {
    ToolTitle,
    Muted,
    Dim,
    Accent,
    ToolDiffAdded,
    ToolDiffRemoved,
    ToolDiffContext,
    ToolOutput,
}

impl StyleToken {
    pub const ALL: [StyleToken; 8] = [
        StyleToken::ToolTitle,
        StyleToken::Muted,
        StyleToken::Dim,
        StyleToken::Accent,
        StyleToken::ToolDiffAdded,
        StyleToken::ToolDiffRemoved,
        StyleToken::ToolDiffContext,
        StyleToken::ToolOutput,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleToken::ToolTitle => "toolTitle",
            StyleToken::Muted => "muted",
            StyleToken::Dim => "dim",
            StyleToken::Accent => "accent",
            StyleToken::ToolDiffAdded => "toolDiffAdded",
            StyleToken::ToolDiffRemoved => "toolDiffRemoved",
            StyleToken::ToolDiffContext => "toolDiffContext",
            StyleToken::ToolOutput => "toolOutput",
        }
    }
}

impl std::fmt::Display for StyleToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case-insensitive, so lowercased environment keys resolve too.
impl FromStr for StyleToken {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleToken::ALL
            .into_iter()
            .find(|token| token.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownStyleToken(s.to_string()))
    }
}
