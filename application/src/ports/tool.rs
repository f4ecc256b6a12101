//! Tool implementation port
//!
//! Tools are built and executed by the host. The overlay only changes how
//! they are displayed, so the execute capability is carried through opaque.

use super::renderer::ResultRenderer;
use async_trait::async_trait;
use collapse_domain::{ToolKind, ToolResult};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a host tool execution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolExecutionError {
    #[error("Tool execution failed: {0}")]
    Failed(String),
}

/// Execute capability of a host tool
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, call_id: &str, args: Value) -> Result<ToolResult, ToolExecutionError>;
}

/// A tool as constructed by the host's factories.
#[derive(Clone)]
pub struct ToolImplementation {
    pub name: String,
    pub label: String,
    pub description: String,
    /// JSON schema of the tool parameters
    pub parameters: Value,
    pub executor: Arc<dyn ToolExecutor>,
    /// The host's own result renderer, used as fallback when expanded
    pub result_renderer: Option<Arc<dyn ResultRenderer>>,
}

impl ToolImplementation {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        executor: Arc<dyn ToolExecutor>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: description.into(),
            parameters: Value::Object(Default::default()),
            executor,
            result_renderer: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_result_renderer(mut self, renderer: Arc<dyn ResultRenderer>) -> Self {
        self.result_renderer = Some(renderer);
        self
    }

    pub fn kind(&self) -> ToolKind {
        ToolKind::from_name(&self.name)
    }
}

impl std::fmt::Debug for ToolImplementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolImplementation")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("has_result_renderer", &self.result_renderer.is_some())
            .finish_non_exhaustive()
    }
}

/// Host collaborator that builds the built-in tools.
///
/// Each tool receives the working directory captured once at activation.
pub trait ToolFactory: Send + Sync {
    fn create(&self, kind: &ToolKind, cwd: &Path) -> ToolImplementation;
}
