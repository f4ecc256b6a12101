//! Invocation line rendering
//!
//! `"<styled tool name> <styled parameters>"`, always non-empty and
//! independent of the expand/partial state.

use crate::ports::renderer::CallRenderer;
use crate::ports::theme::Theme;
use collapse_domain::{RenderedText, StyleToken, ToolInvocationArgs, ToolKind};
use serde_json::Value;

/// Call renderer bound to one tool name.
#[derive(Debug, Clone)]
pub struct ToolCallRenderer {
    kind: ToolKind,
}

impl ToolCallRenderer {
    pub fn new(kind: ToolKind) -> Self {
        Self { kind }
    }

    pub fn for_tool(name: &str) -> Self {
        Self::new(ToolKind::from_name(name))
    }

    /// Render the call line. Missing fields render as empty segments.
    pub fn render(&self, args: &Value, theme: &dyn Theme) -> RenderedText {
        let invocation = ToolInvocationArgs::from_json(&self.kind, args);
        let title = theme.fg(StyleToken::ToolTitle, &theme.bold(self.kind.as_str()));
        let params = Self::params(&invocation, theme);
        RenderedText::new(format!("{title} {params}"))
    }

    fn params(invocation: &ToolInvocationArgs, theme: &dyn Theme) -> String {
        match invocation {
            ToolInvocationArgs::Bash(args) => {
                let mut params = theme.fg(StyleToken::Muted, text(&args.command));
                if let Some(timeout) = &args.timeout {
                    params += &theme.fg(StyleToken::Dim, &format!(" (timeout: {timeout}s)"));
                }
                params
            }
            ToolInvocationArgs::Read(args) => {
                let mut params = theme.fg(StyleToken::Accent, text(&args.path));
                if let Some(offset) = &args.offset {
                    params += &theme.fg(StyleToken::Dim, &format!(" offset={offset}"));
                }
                if let Some(limit) = &args.limit {
                    params += &theme.fg(StyleToken::Dim, &format!(" limit={limit}"));
                }
                params
            }
            ToolInvocationArgs::Write(args) | ToolInvocationArgs::Edit(args) => {
                theme.fg(StyleToken::Accent, text(&args.path))
            }
            ToolInvocationArgs::Grep(args) => {
                let mut params = theme.fg(StyleToken::Accent, text(&args.pattern));
                if let Some(path) = &args.path {
                    params.push(' ');
                    params += &theme.fg(StyleToken::Muted, path);
                }
                if let Some(glob) = &args.glob {
                    params.push(' ');
                    params += &theme.fg(StyleToken::Dim, glob);
                }
                params
            }
            ToolInvocationArgs::Find(args) => {
                let mut params = theme.fg(StyleToken::Accent, text(&args.pattern));
                if let Some(path) = &args.path {
                    params.push(' ');
                    params += &theme.fg(StyleToken::Muted, path);
                }
                params
            }
            ToolInvocationArgs::Ls(args) => theme.fg(StyleToken::Accent, args.display_path()),
            ToolInvocationArgs::Other { .. } => theme.fg(
                StyleToken::Dim,
                &invocation.raw_dump().unwrap_or_default(),
            ),
        }
    }
}

impl CallRenderer for ToolCallRenderer {
    fn render_call(&self, args: &Value, theme: &dyn Theme) -> RenderedText {
        self.render(args, theme)
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}
