//! Replay tool factory: host tools whose execution returns recorded results

use super::TranscriptEntry;
use async_trait::async_trait;
use collapse_application::{ToolExecutionError, ToolExecutor, ToolFactory, ToolImplementation};
use collapse_domain::{ToolKind, ToolResult};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::trace;

/// Hands out recorded results in transcript order
pub struct ReplayExecutor {
    tool: String,
    results: Mutex<VecDeque<ToolResult>>,
}

impl ReplayExecutor {
    pub fn new(tool: impl Into<String>, results: impl IntoIterator<Item = ToolResult>) -> Self {
        Self {
            tool: tool.into(),
            results: Mutex::new(results.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.results.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ToolExecutor for ReplayExecutor {
    async fn execute(&self, call_id: &str, _args: Value) -> Result<ToolResult, ToolExecutionError> {
        trace!(tool = %self.tool, call_id, "Replaying recorded result");
        let next = self
            .results
            .lock()
            .map_err(|_| ToolExecutionError::Failed("replay queue poisoned".to_string()))?
            .pop_front();
        next.ok_or_else(|| {
            ToolExecutionError::Failed(format!("no recorded result left for '{}'", self.tool))
        })
    }
}

/// Builds the built-in tools from a transcript instead of the real runtime
#[derive(Debug, Default)]
pub struct ReplayToolFactory {
    recorded: HashMap<String, Vec<ToolResult>>,
}

impl ReplayToolFactory {
    /// Group finished entries by tool name, keeping transcript order
    pub fn from_entries(entries: &[TranscriptEntry]) -> Self {
        let mut recorded: HashMap<String, Vec<ToolResult>> = HashMap::new();
        for entry in entries {
            if let Some(result) = &entry.result {
                recorded
                    .entry(entry.tool.clone())
                    .or_default()
                    .push(result.clone());
            }
        }
        Self { recorded }
    }

    fn label(kind: &ToolKind) -> String {
        let name = kind.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl ToolFactory for ReplayToolFactory {
    fn create(&self, kind: &ToolKind, cwd: &Path) -> ToolImplementation {
        let results = self.recorded.get(kind.as_str()).cloned().unwrap_or_default();
        ToolImplementation::new(
            kind.as_str(),
            Self::label(kind),
            format!("Replays recorded {} results (cwd: {})", kind, cwd.display()),
            Arc::new(ReplayExecutor::new(kind.as_str(), results)),
        )
        .with_parameters(json!({"type": "object"}))
    }
}
