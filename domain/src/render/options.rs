//! UI state the host passes with every result render

use serde::{Deserialize, Serialize};

/// Snapshot of the host's display state for one tool invocation.
///
/// Owned by the host and supplied fresh on every render; never persisted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// User toggled the output open
    #[serde(default)]
    pub expanded: bool,
    /// Invocation is still running
    #[serde(default)]
    pub is_partial: bool,
}

impl RenderOptions {
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn expanded() -> Self {
        Self {
            expanded: true,
            is_partial: false,
        }
    }

    pub fn partial() -> Self {
        Self {
            expanded: false,
            is_partial: true,
        }
    }

    /// Classify this snapshot. A running invocation is `Partial` whatever
    /// its expansion.
    pub fn state(&self) -> RenderState {
        if self.is_partial {
            RenderState::Partial
        } else if self.expanded {
            RenderState::Expanded
        } else {
            RenderState::Collapsed
        }
    }
}

/// Display state of a tool result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderState {
    /// Still executing: only a running indicator
    Partial,
    /// Finished, output hidden (default)
    Collapsed,
    /// Finished, output revealed
    Expanded,
}

impl RenderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderState::Partial => "partial",
            RenderState::Collapsed => "collapsed",
            RenderState::Expanded => "expanded",
        }
    }
}

impl std::fmt::Display for RenderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_takes_precedence() {
        let options = RenderOptions {
            expanded: true,
            is_partial: true,
        };
        assert_eq!(options.state(), RenderState::Partial);
        assert_eq!(RenderOptions::partial().state(), RenderState::Partial);
    }

    #[test]
    fn test_default_is_collapsed() {
        assert_eq!(RenderOptions::default().state(), RenderState::Collapsed);
        assert_eq!(RenderOptions::expanded().state(), RenderState::Expanded);
    }

    #[test]
    fn test_deserialize_host_options() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"expanded": true, "isPartial": false}"#).unwrap();
        assert_eq!(options, RenderOptions::expanded());

        let options: RenderOptions = serde_json::from_str(r#"{"isPartial": true}"#).unwrap();
        assert_eq!(options.state(), RenderState::Partial);
    }
}
