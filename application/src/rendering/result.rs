//! Result rendering: hidden unless expanded
//!
//! | State | Output |
//! |-------|--------|
//! | Partial | running indicator (wins over expansion) |
//! | Collapsed | nothing |
//! | Expanded | edit diff, else host fallback renderer, else first text item |

use super::diff::DiffFormatter;
use crate::config::DEFAULT_RUNNING_INDICATOR;
use crate::ports::renderer::ResultRenderer;
use crate::ports::theme::Theme;
use collapse_domain::{RenderOptions, RenderState, RenderedText, StyleToken, ToolKind, ToolResult, has_changes};
use std::sync::Arc;
use tracing::trace;

/// Result renderer bound to one tool name and, optionally, the host's
/// original renderer for that tool.
#[derive(Clone)]
pub struct CollapsibleResultRenderer {
    kind: ToolKind,
    fallback: Option<Arc<dyn ResultRenderer>>,
    running_indicator: String,
}

impl CollapsibleResultRenderer {
    pub fn new(kind: ToolKind, fallback: Option<Arc<dyn ResultRenderer>>) -> Self {
        Self {
            kind,
            fallback,
            running_indicator: DEFAULT_RUNNING_INDICATOR.to_string(),
        }
    }

    pub fn with_running_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.running_indicator = indicator.into();
        self
    }

    pub fn render(
        &self,
        result: &ToolResult,
        options: RenderOptions,
        theme: &dyn Theme,
    ) -> Option<RenderedText> {
        let state = options.state();
        trace!(tool = %self.kind, %state, "Rendering tool result");

        match state {
            RenderState::Partial => Some(RenderedText::new(
                theme.fg(StyleToken::Dim, &self.running_indicator),
            )),
            RenderState::Collapsed => None,
            RenderState::Expanded => self.render_expanded(result, options, theme),
        }
    }

    fn render_expanded(
        &self,
        result: &ToolResult,
        options: RenderOptions,
        theme: &dyn Theme,
    ) -> Option<RenderedText> {
        if self.kind.renders_diff() {
            if let Some(diff) = result.diff().filter(|d| has_changes(d)) {
                return Some(RenderedText::new(format!(
                    "\n{}",
                    DiffFormatter::format(diff, theme)
                )));
            }
        }

        if let Some(fallback) = &self.fallback {
            return fallback.render_result(result, options, theme);
        }

        let text = result.first_text().filter(|t| !t.is_empty())?;
        Some(RenderedText::new(format!(
            "\n{}",
            theme.fg(StyleToken::ToolOutput, text)
        )))
    }
}

impl ResultRenderer for CollapsibleResultRenderer {
    fn render_result(
        &self,
        result: &ToolResult,
        options: RenderOptions,
        theme: &dyn Theme,
    ) -> Option<RenderedText> {
        self.render(result, options, theme)
    }
}

impl std::fmt::Debug for CollapsibleResultRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollapsibleResultRenderer")
            .field("kind", &self.kind)
            .field("has_fallback", &self.fallback.is_some())
            .field("running_indicator", &self.running_indicator)
            .finish()
    }
}
