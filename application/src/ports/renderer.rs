//! Renderer ports
//!
//! The host calls these on every redraw. Both must be pure and prompt: no
//! I/O, no blocking, no state carried between calls.

use super::theme::Theme;
use collapse_domain::{RenderOptions, RenderedText, ToolResult};
use serde_json::Value;

/// Renders the always-visible invocation line
pub trait CallRenderer: Send + Sync {
    fn render_call(&self, args: &Value, theme: &dyn Theme) -> RenderedText;
}

/// Renders what appears beneath the invocation line.
///
/// `None` means nothing is displayed.
pub trait ResultRenderer: Send + Sync {
    fn render_result(
        &self,
        result: &ToolResult,
        options: RenderOptions,
        theme: &dyn Theme,
    ) -> Option<RenderedText>;
}
