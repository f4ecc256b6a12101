//! Tool kind: which built-in tool an invocation targets

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The kind of tool being invoked, keyed by the tool's registered name.
///
/// `Other` carries the original name so unknown tools can still be labeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Shell command execution
    Bash,
    /// File read
    Read,
    /// File write
    Write,
    /// In-place file edit (results carry a diff)
    Edit,
    /// Content search by pattern
    Grep,
    /// File search by glob pattern
    Find,
    /// Directory listing
    Ls,
    /// Any tool without a dedicated summary
    Other(String),
}

impl ToolKind {
    /// The supported tool kinds, in registration order.
    pub const SUPPORTED: [ToolKind; 7] = [
        ToolKind::Read,
        ToolKind::Bash,
        ToolKind::Write,
        ToolKind::Edit,
        ToolKind::Grep,
        ToolKind::Find,
        ToolKind::Ls,
    ];

    /// Map a tool name to its kind. Never fails: unknown names become `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bash" => ToolKind::Bash,
            "read" => ToolKind::Read,
            "write" => ToolKind::Write,
            "edit" => ToolKind::Edit,
            "grep" => ToolKind::Grep,
            "find" => ToolKind::Find,
            "ls" => ToolKind::Ls,
            other => ToolKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ToolKind::Bash => "bash",
            ToolKind::Read => "read",
            ToolKind::Write => "write",
            ToolKind::Edit => "edit",
            ToolKind::Grep => "grep",
            ToolKind::Find => "find",
            ToolKind::Ls => "ls",
            ToolKind::Other(name) => name,
        }
    }

    /// Whether expanded results of this kind should prefer a diff view
    pub fn renders_diff(&self) -> bool {
        matches!(self, ToolKind::Edit)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ToolKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ToolKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_supported() {
        for kind in ToolKind::SUPPORTED {
            assert_eq!(ToolKind::from_name(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_name_is_other() {
        let kind = ToolKind::from_name("web_fetch");
        assert_eq!(kind, ToolKind::Other("web_fetch".to_string()));
        assert_eq!(kind.as_str(), "web_fetch");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(ToolKind::from_name("Bash"), ToolKind::Other("Bash".to_string()));
    }

    #[test]
    fn test_registration_order() {
        let names: Vec<&str> = ToolKind::SUPPORTED.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["read", "bash", "write", "edit", "grep", "find", "ls"]);
    }

    #[test]
    fn test_only_edit_renders_diff() {
        assert!(ToolKind::Edit.renders_diff());
        assert!(!ToolKind::Write.renders_diff());
        assert!(!ToolKind::Other("edit_file".into()).renders_diff());
    }

    #[test]
    fn test_serde_uses_tool_name() {
        let json = serde_json::to_string(&ToolKind::Grep).unwrap();
        assert_eq!(json, "\"grep\"");
        let kind: ToolKind = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(kind, ToolKind::Other("custom".to_string()));
    }
}
