//! Tool results as produced by the host's tool execution
//!
//! The overlay only reads results: the first text item for the plain-text
//! view and `details.diff` for the edit view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single piece of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text {
        text: String,
    },
    Image {
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
    /// Any content type the overlay does not display
    #[serde(other)]
    Unsupported,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentItem::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// Result of a tool execution.
///
/// `details` is tool-specific and left as open JSON; edit tools put the
/// unified diff of the change under `details.diff`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    #[serde(default)]
    pub content: Vec<ContentItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ToolResult {
    /// Create a result holding a single text item
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(text)],
            details: None,
        }
    }

    pub fn with_content(mut self, item: ContentItem) -> Self {
        self.content.push(item);
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a unified diff under `details.diff`, keeping other details
    pub fn with_diff(mut self, diff: impl Into<String>) -> Self {
        let diff = Value::String(diff.into());
        match self.details.as_mut().and_then(Value::as_object_mut) {
            Some(details) => {
                details.insert("diff".to_string(), diff);
            }
            None => {
                self.details = Some(serde_json::json!({ "diff": diff }));
            }
        }
        self
    }

    /// `details.diff`, only when it is a string
    pub fn diff(&self) -> Option<&str> {
        self.details.as_ref()?.get("diff")?.as_str()
    }

    /// Text of the first text-typed content item
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(ContentItem::as_text)
    }
}
