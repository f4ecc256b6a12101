//! Tool invocation arguments, as far as the call line is concerned
//!
//! Only the fields a summary surfaces are extracted; everything else in the
//! model's JSON is ignored for supported kinds. Two extraction rules apply:
//!
//! - **Primary** fields (`command`, `path`, `pattern`): a JSON string is taken
//!   as-is, null/missing stays absent, any other value becomes its JSON text.
//! - **Annotations** (`timeout`, `offset`, `limit`, secondary `path`, `glob`):
//!   kept only when truthy: a non-zero number, a non-empty string, `true`,
//!   or a non-null compound value.

use super::kind::ToolKind;
use serde_json::{Map, Value};

/// `bash` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BashArgs {
    pub command: Option<String>,
    /// Timeout in seconds, already rendered as text
    pub timeout: Option<String>,
}

/// `read` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadArgs {
    pub path: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

/// `write` / `edit` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    pub path: Option<String>,
}

/// `grep` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrepArgs {
    pub pattern: Option<String>,
    pub path: Option<String>,
    pub glob: Option<String>,
}

/// `find` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindArgs {
    pub pattern: Option<String>,
    pub path: Option<String>,
}

/// `ls` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LsArgs {
    pub path: Option<String>,
}

impl LsArgs {
    /// Directory shown on the call line; `.` when no path was given
    pub fn display_path(&self) -> &str {
        self.path.as_deref().unwrap_or(".")
    }
}

/// Arguments of a single tool invocation, keyed by tool kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInvocationArgs {
    Bash(BashArgs),
    Read(ReadArgs),
    Write(PathArgs),
    Edit(PathArgs),
    Grep(GrepArgs),
    Find(FindArgs),
    Ls(LsArgs),
    /// Unrecognized tool: the raw argument value is kept for a structural dump
    Other { tool_name: String, raw: Value },
}

impl ToolInvocationArgs {
    /// Extract the call-line fields for `kind` from raw JSON arguments.
    ///
    /// Total: non-object arguments yield empty fields for supported kinds.
    pub fn from_json(kind: &ToolKind, args: &Value) -> Self {
        let empty = Map::new();
        let map = args.as_object().unwrap_or(&empty);

        match kind {
            ToolKind::Bash => ToolInvocationArgs::Bash(BashArgs {
                command: primary(map, "command"),
                timeout: annotation(map, "timeout"),
            }),
            ToolKind::Read => ToolInvocationArgs::Read(ReadArgs {
                path: primary(map, "path"),
                offset: annotation(map, "offset"),
                limit: annotation(map, "limit"),
            }),
            ToolKind::Write => ToolInvocationArgs::Write(PathArgs {
                path: primary(map, "path"),
            }),
            ToolKind::Edit => ToolInvocationArgs::Edit(PathArgs {
                path: primary(map, "path"),
            }),
            ToolKind::Grep => ToolInvocationArgs::Grep(GrepArgs {
                pattern: primary(map, "pattern"),
                path: annotation(map, "path"),
                glob: annotation(map, "glob"),
            }),
            ToolKind::Find => ToolInvocationArgs::Find(FindArgs {
                pattern: primary(map, "pattern"),
                path: annotation(map, "path"),
            }),
            ToolKind::Ls => ToolInvocationArgs::Ls(LsArgs {
                path: primary(map, "path"),
            }),
            ToolKind::Other(name) => ToolInvocationArgs::Other {
                tool_name: name.clone(),
                raw: args.clone(),
            },
        }
    }

    /// Compact JSON dump of the raw arguments (fallback arm only)
    pub fn raw_dump(&self) -> Option<String> {
        match self {
            ToolInvocationArgs::Other { raw, .. } => {
                Some(serde_json::to_string(raw).unwrap_or_default())
            }
            _ => None,
        }
    }
}

fn primary(args: &Map<String, Value>, key: &str) -> Option<String> {
    match args.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn annotation(args: &Map<String, Value>, key: &str) -> Option<String> {
    match args.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bash_with_timeout() {
        let args = ToolInvocationArgs::from_json(
            &ToolKind::Bash,
            &json!({"command": "cargo test", "timeout": 30}),
        );
        assert_eq!(
            args,
            ToolInvocationArgs::Bash(BashArgs {
                command: Some("cargo test".to_string()),
                timeout: Some("30".to_string()),
            })
        );
    }

    #[test]
    fn test_zero_annotations_are_dropped() {
        let args = ToolInvocationArgs::from_json(
            &ToolKind::Read,
            &json!({"path": "/tmp/x", "offset": 0, "limit": ""}),
        );
        assert_eq!(
            args,
            ToolInvocationArgs::Read(ReadArgs {
                path: Some("/tmp/x".to_string()),
                offset: None,
                limit: None,
            })
        );
    }

    #[test]
    fn test_fractional_numbers_keep_their_text() {
        let args =
            ToolInvocationArgs::from_json(&ToolKind::Bash, &json!({"command": "x", "timeout": 1.5}));
        let ToolInvocationArgs::Bash(bash) = args else {
            panic!("expected bash args");
        };
        assert_eq!(bash.timeout.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_non_string_primary_is_stringified() {
        let args = ToolInvocationArgs::from_json(&ToolKind::Grep, &json!({"pattern": 42}));
        let ToolInvocationArgs::Grep(grep) = args else {
            panic!("expected grep args");
        };
        assert_eq!(grep.pattern.as_deref(), Some("42"));
        assert!(grep.path.is_none());
        assert!(grep.glob.is_none());
    }

    #[test]
    fn test_null_primary_is_absent() {
        let args = ToolInvocationArgs::from_json(&ToolKind::Write, &json!({"path": null}));
        assert_eq!(args, ToolInvocationArgs::Write(PathArgs { path: None }));
    }

    #[test]
    fn test_ls_defaults_to_current_dir() {
        let ToolInvocationArgs::Ls(ls) = ToolInvocationArgs::from_json(&ToolKind::Ls, &json!({}))
        else {
            panic!("expected ls args");
        };
        assert_eq!(ls.display_path(), ".");

        let ToolInvocationArgs::Ls(ls) =
            ToolInvocationArgs::from_json(&ToolKind::Ls, &json!({"path": "src"}))
        else {
            panic!("expected ls args");
        };
        assert_eq!(ls.display_path(), "src");
    }

    #[test]
    fn test_non_object_arguments_for_known_kind() {
        let args = ToolInvocationArgs::from_json(&ToolKind::Find, &json!("oops"));
        assert_eq!(args, ToolInvocationArgs::Find(FindArgs::default()));
    }

    #[test]
    fn test_annotation_truthiness() {
        let args = ToolInvocationArgs::from_json(
            &ToolKind::Grep,
            &json!({"pattern": "p", "path": "", "glob": true}),
        );
        assert_eq!(
            args,
            ToolInvocationArgs::Grep(GrepArgs {
                pattern: Some("p".to_string()),
                path: None,
                glob: Some("true".to_string()),
            })
        );
    }

    #[test]
    fn test_other_keeps_non_object_value() {
        let kind = ToolKind::from_name("web_fetch");
        let args = ToolInvocationArgs::from_json(&kind, &json!("oops"));
        assert_eq!(args.raw_dump().as_deref(), Some(r#""oops""#));
    }

    #[test]
    fn test_other_keeps_raw_value() {
        let kind = ToolKind::from_name("web_fetch");
        let args = ToolInvocationArgs::from_json(&kind, &json!({"foo": "bar"}));
        assert!(matches!(&args, ToolInvocationArgs::Other { tool_name, .. } if tool_name == "web_fetch"));
        assert_eq!(args.raw_dump().as_deref(), Some(r#"{"foo":"bar"}"#));
    }

    #[test]
    fn test_raw_dump_only_for_fallback() {
        let args = ToolInvocationArgs::from_json(&ToolKind::Edit, &json!({"path": "a.rs"}));
        assert!(args.raw_dump().is_none());
        assert!(matches!(args, ToolInvocationArgs::Edit(_)));
    }
}
