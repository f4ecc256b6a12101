//! Host runtime port
//!
//! The host owns tool registration, the event bus and the UI. The overlay
//! registers adapted tools and listens for session start; nothing else.

use super::renderer::{CallRenderer, ResultRenderer};
use super::theme::Theme;
use super::tool::{ToolExecutionError, ToolExecutor};
use collapse_domain::{NotifyLevel, RenderOptions, RenderedText, ToolResult};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors the host may report when registering a tool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Host rejected tool '{tool}': {reason}")]
    Rejected { tool: String, reason: String },
}

/// Lifecycle events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    SessionStart,
    SessionShutdown,
}

impl HostEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostEvent::SessionStart => "session_start",
            HostEvent::SessionShutdown => "session_shutdown",
        }
    }
}

/// Host notification channel
pub trait UserInterface: Send + Sync {
    fn notify(&self, message: &str, level: NotifyLevel);
}

/// What a handler receives alongside an event
pub struct EventContext<'a> {
    pub ui: &'a dyn UserInterface,
    pub cwd: &'a Path,
}

/// Subscriber to host events
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: HostEvent, ctx: &EventContext<'_>);
}

/// The record handed to the host for one tool.
///
/// Identity fields and the executor are the original tool's; the two
/// renderers are the overlay's.
#[derive(Clone)]
pub struct ToolRegistration {
    pub name: String,
    pub label: String,
    pub description: String,
    pub parameters: Value,
    pub executor: Arc<dyn ToolExecutor>,
    pub call_renderer: Arc<dyn CallRenderer>,
    pub result_renderer: Arc<dyn ResultRenderer>,
}

impl ToolRegistration {
    pub async fn execute(&self, call_id: &str, args: Value) -> Result<ToolResult, ToolExecutionError> {
        self.executor.execute(call_id, args).await
    }

    pub fn render_call(&self, args: &Value, theme: &dyn Theme) -> RenderedText {
        self.call_renderer.render_call(args, theme)
    }

    pub fn render_result(
        &self,
        result: &ToolResult,
        options: RenderOptions,
        theme: &dyn Theme,
    ) -> Option<RenderedText> {
        self.result_renderer.render_result(result, options, theme)
    }
}

impl std::fmt::Debug for ToolRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistration")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Registration surface of the host runtime
pub trait ExtensionHost {
    /// Hand a tool to the host, which owns its display dispatch from then on
    fn register_tool(&mut self, registration: ToolRegistration) -> Result<(), HostError>;

    /// Subscribe a handler to a lifecycle event
    fn on(&mut self, event: HostEvent, handler: Arc<dyn EventHandler>);
}
