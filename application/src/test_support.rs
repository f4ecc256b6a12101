//! Shared fakes for unit tests

use crate::ports::host::{
    EventContext, EventHandler, ExtensionHost, HostError, HostEvent, ToolRegistration,
    UserInterface,
};
use crate::ports::renderer::ResultRenderer;
use crate::ports::theme::Theme;
use crate::ports::tool::{ToolExecutionError, ToolExecutor, ToolFactory, ToolImplementation};
use async_trait::async_trait;
use collapse_domain::{NotifyLevel, RenderOptions, RenderedText, StyleToken, ToolKind, ToolResult};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Wraps styled segments as `<token>text</token>` and bold as `<b>text</b>`
pub struct RecordingTheme;

impl Theme for RecordingTheme {
    fn fg(&self, token: StyleToken, text: &str) -> String {
        format!("<{token}>{text}</{token}>")
    }

    fn bold(&self, text: &str) -> String {
        format!("<b>{text}</b>")
    }
}

/// Executor returning a fixed result and counting calls
pub struct StaticExecutor {
    pub result: ToolResult,
    pub calls: AtomicUsize,
}

impl StaticExecutor {
    pub fn new(result: ToolResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ToolExecutor for StaticExecutor {
    async fn execute(&self, _call_id: &str, _args: Value) -> Result<ToolResult, ToolExecutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

/// Host-style fallback renderer that always renders a fixed text
pub struct FixedRenderer(pub &'static str);

impl ResultRenderer for FixedRenderer {
    fn render_result(
        &self,
        _result: &ToolResult,
        _options: RenderOptions,
        _theme: &dyn Theme,
    ) -> Option<RenderedText> {
        Some(RenderedText::new(self.0))
    }
}

/// Factory recording the cwd it was given
#[derive(Default)]
pub struct FakeFactory {
    pub cwds: Mutex<Vec<PathBuf>>,
}

impl ToolFactory for FakeFactory {
    fn create(&self, kind: &ToolKind, cwd: &Path) -> ToolImplementation {
        self.cwds.lock().unwrap().push(cwd.to_path_buf());
        let tool = ToolImplementation::new(
            kind.as_str(),
            kind.as_str().to_uppercase(),
            format!("{kind} tool"),
            StaticExecutor::new(ToolResult::text(format!("{kind} output"))),
        );
        if matches!(kind, ToolKind::Read) {
            tool.with_result_renderer(Arc::new(FixedRenderer("host read view")))
        } else {
            tool
        }
    }
}

/// Host collecting registrations and subscriptions
#[derive(Default)]
pub struct FakeHost {
    pub tools: Vec<ToolRegistration>,
    pub handlers: Vec<(HostEvent, Arc<dyn EventHandler>)>,
    pub reject: Option<String>,
}

impl ExtensionHost for FakeHost {
    fn register_tool(&mut self, registration: ToolRegistration) -> Result<(), HostError> {
        if self.reject.as_deref() == Some(registration.name.as_str()) {
            return Err(HostError::Rejected {
                tool: registration.name,
                reason: "blocked".to_string(),
            });
        }
        if self.tools.iter().any(|t| t.name == registration.name) {
            return Err(HostError::DuplicateTool(registration.name));
        }
        self.tools.push(registration);
        Ok(())
    }

    fn on(&mut self, event: HostEvent, handler: Arc<dyn EventHandler>) {
        self.handlers.push((event, handler));
    }
}

impl FakeHost {
    pub fn tool(&self, name: &str) -> &ToolRegistration {
        self.tools
            .iter()
            .find(|t| t.name == name)
            .unwrap_or_else(|| panic!("tool {name} not registered"))
    }

    pub fn emit(&self, event: HostEvent, ui: &dyn UserInterface) {
        let ctx = EventContext {
            ui,
            cwd: Path::new("/work"),
        };
        for (subscribed, handler) in &self.handlers {
            if *subscribed == event {
                handler.handle(event, &ctx);
            }
        }
    }
}

/// UI recording every notification
#[derive(Default)]
pub struct RecordingUi {
    pub notices: Mutex<Vec<(String, NotifyLevel)>>,
}

impl UserInterface for RecordingUi {
    fn notify(&self, message: &str, level: NotifyLevel) {
        self.notices.lock().unwrap().push((message.to_string(), level));
    }
}
