//! Tool adaptation: same tool, overlay rendering

use crate::config::DEFAULT_RUNNING_INDICATOR;
use crate::ports::host::ToolRegistration;
use crate::ports::tool::ToolImplementation;
use crate::rendering::{call::ToolCallRenderer, result::CollapsibleResultRenderer};
use std::sync::Arc;
use tracing::debug;

/// Composes a host tool with [`ToolCallRenderer`] and
/// [`CollapsibleResultRenderer`].
///
/// Name, label, description, parameter schema and executor are carried over
/// untouched; the tool's own result renderer becomes the expanded fallback.
#[derive(Debug, Clone)]
pub struct ToolAdapter {
    running_indicator: String,
}

impl Default for ToolAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_RUNNING_INDICATOR)
    }
}

impl ToolAdapter {
    pub fn new(running_indicator: impl Into<String>) -> Self {
        Self {
            running_indicator: running_indicator.into(),
        }
    }

    pub fn adapt(&self, tool: ToolImplementation) -> ToolRegistration {
        let kind = tool.kind();
        debug!(
            tool = %kind,
            has_fallback = tool.result_renderer.is_some(),
            "Adapting tool renderers"
        );

        let call_renderer = ToolCallRenderer::new(kind.clone());
        let result_renderer = CollapsibleResultRenderer::new(kind, tool.result_renderer)
            .with_running_indicator(self.running_indicator.clone());

        ToolRegistration {
            name: tool.name,
            label: tool.label,
            description: tool.description,
            parameters: tool.parameters,
            executor: tool.executor,
            call_renderer: Arc::new(call_renderer),
            result_renderer: Arc::new(result_renderer),
        }
    }
}
