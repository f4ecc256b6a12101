//! Console host: a minimal stand-in for the agent runtime
//!
//! Holds registered tools and event subscriptions, prints notifications, and
//! renders invocations the way the real host would on each redraw.

use crate::transcript::TranscriptEntry;
use collapse_application::{
    CallRenderer, CollapsibleResultRenderer, EventContext, EventHandler, ExtensionHost,
    HostError, HostEvent, ResultRenderer, Theme, ToolCallRenderer, ToolExecutionError,
    ToolRegistration, UserInterface,
};
use collapse_domain::{NotifyLevel, RenderOptions, RenderedText, ToolKind, ToolResult};
use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Notification channel writing one line per notice
pub struct ConsoleUi {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleUi {
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(io::stderr()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn prefix(level: NotifyLevel) -> String {
        match level {
            NotifyLevel::Info => "ℹ".cyan().to_string(),
            NotifyLevel::Warning => "⚠".yellow().to_string(),
            NotifyLevel::Error => "✗".red().to_string(),
        }
    }
}

impl UserInterface for ConsoleUi {
    fn notify(&self, message: &str, level: NotifyLevel) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "{} {}", Self::prefix(level), message) {
            warn!(error = %e, "Failed to write notification");
        }
    }
}

/// Call line plus whatever is displayed beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInvocation {
    pub call: RenderedText,
    pub result: Option<RenderedText>,
}

impl std::fmt::Display for RenderedInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.call)?;
        if let Some(result) = &self.result {
            write!(f, "\n{}", result)?;
        }
        Ok(())
    }
}

/// In-process host implementing the registration boundary.
pub struct ConsoleHost {
    cwd: PathBuf,
    theme: Arc<dyn Theme>,
    ui: ConsoleUi,
    tools: Vec<ToolRegistration>,
    handlers: Vec<(HostEvent, Arc<dyn EventHandler>)>,
}

impl ConsoleHost {
    pub fn new(cwd: impl Into<PathBuf>, theme: Arc<dyn Theme>) -> Self {
        Self {
            cwd: cwd.into(),
            theme,
            ui: ConsoleUi::stderr(),
            tools: Vec::new(),
            handlers: Vec::new(),
        }
    }

    pub fn with_ui(mut self, ui: ConsoleUi) -> Self {
        self.ui = ui;
        self
    }

    pub fn tool(&self, name: &str) -> Option<&ToolRegistration> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Deliver an event to its subscribers
    pub fn emit(&self, event: HostEvent) {
        let ctx = EventContext {
            ui: &self.ui,
            cwd: &self.cwd,
        };
        for (subscribed, handler) in &self.handlers {
            if *subscribed == event {
                handler.handle(event, &ctx);
            }
        }
    }

    pub fn start_session(&self) {
        debug!("Starting session");
        self.emit(HostEvent::SessionStart);
    }

    /// Render an invocation with its (possibly absent) result.
    ///
    /// Unregistered tools get the overlay's default renderers with no
    /// host fallback.
    pub fn render_invocation(
        &self,
        name: &str,
        args: &Value,
        result: &ToolResult,
        options: RenderOptions,
    ) -> RenderedInvocation {
        let theme = self.theme.as_ref();
        match self.tool(name) {
            Some(tool) => RenderedInvocation {
                call: tool.render_call(args, theme),
                result: tool.render_result(result, options, theme),
            },
            None => {
                let kind = ToolKind::from_name(name);
                RenderedInvocation {
                    call: ToolCallRenderer::new(kind.clone()).render_call(args, theme),
                    result: CollapsibleResultRenderer::new(kind, None)
                        .render_result(result, options, theme),
                }
            }
        }
    }

    /// Replay one transcript entry.
    ///
    /// Entries without a result are still running and render as partial.
    /// Registered tools are executed through their executor so the result
    /// comes from the tool itself.
    pub async fn replay(
        &self,
        call_id: &str,
        entry: &TranscriptEntry,
        options: RenderOptions,
    ) -> Result<RenderedInvocation, ToolExecutionError> {
        let Some(recorded) = &entry.result else {
            return Ok(self.render_invocation(
                &entry.tool,
                &entry.args,
                &ToolResult::default(),
                RenderOptions::partial(),
            ));
        };

        let result = match self.tool(&entry.tool) {
            Some(tool) => tool.execute(call_id, entry.args.clone()).await?,
            None => recorded.clone(),
        };
        Ok(self.render_invocation(&entry.tool, &entry.args, &result, options))
    }
}

impl ExtensionHost for ConsoleHost {
    fn register_tool(&mut self, registration: ToolRegistration) -> Result<(), HostError> {
        if self.tool(&registration.name).is_some() {
            return Err(HostError::DuplicateTool(registration.name));
        }
        debug!(tool = %registration.name, label = %registration.label, "Tool registered");
        self.tools.push(registration);
        Ok(())
    }

    fn on(&mut self, event: HostEvent, handler: Arc<dyn EventHandler>) {
        debug!(event = event.as_str(), "Handler subscribed");
        self.handlers.push((event, handler));
    }
}
