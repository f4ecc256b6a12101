//! Extension activation
//!
//! Runs once when the host loads the overlay: builds the seven built-in
//! tools from the host's factory, swaps in the collapsed renderers, registers
//! them and subscribes the session notice.

use super::adapt_tool::ToolAdapter;
use super::session_notifier::SessionNotifier;
use crate::config::OverlayConfig;
use crate::ports::host::{ExtensionHost, HostError, HostEvent};
use crate::ports::tool::ToolFactory;
use collapse_domain::ToolKind;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort activation
#[derive(Error, Debug)]
pub enum ActivationError {
    #[error("Failed to register tool '{tool}': {source}")]
    Registration {
        tool: String,
        #[source]
        source: HostError,
    },
}

/// The collapse-tools extension.
pub struct CollapseToolsExtension {
    cwd: PathBuf,
    config: OverlayConfig,
}

impl CollapseToolsExtension {
    /// `cwd` is captured once and handed opaquely to the tool factory.
    pub fn new(cwd: impl Into<PathBuf>, config: OverlayConfig) -> Self {
        Self {
            cwd: cwd.into(),
            config,
        }
    }

    /// Register the adapted built-in tools with `host`, in
    /// [`ToolKind::SUPPORTED`] order, then subscribe the session notice.
    ///
    /// Stops at the first registration the host refuses.
    pub fn activate(
        &self,
        host: &mut dyn ExtensionHost,
        factory: &dyn ToolFactory,
    ) -> Result<Vec<String>, ActivationError> {
        let adapter = ToolAdapter::new(self.config.running_indicator.clone());
        let mut registered = Vec::with_capacity(ToolKind::SUPPORTED.len());

        for kind in &ToolKind::SUPPORTED {
            let tool = factory.create(kind, &self.cwd);
            let registration = adapter.adapt(tool);
            let name = registration.name.clone();

            host.register_tool(registration).map_err(|source| {
                warn!(tool = %name, error = %source, "Host refused tool registration");
                ActivationError::Registration {
                    tool: name.clone(),
                    source,
                }
            })?;
            debug!(tool = %name, "Registered tool");
            registered.push(name);
        }

        match &self.config.notice {
            Some(notice) => {
                host.on(
                    HostEvent::SessionStart,
                    Arc::new(SessionNotifier::new(notice.clone())),
                );
            }
            None => debug!("Session notice disabled"),
        }

        info!(
            tools = registered.len(),
            cwd = %self.cwd.display(),
            "Collapse tools activated"
        );
        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::theme::PlainTheme;
    use crate::test_support::{FakeFactory, FakeHost, RecordingUi};
    use collapse_domain::{NotifyLevel, RenderOptions, SessionNotice, ToolResult};
    use serde_json::json;
    use std::path::Path;

    fn activate(host: &mut FakeHost, config: OverlayConfig) -> Result<Vec<String>, ActivationError> {
        let factory = FakeFactory::default();
        CollapseToolsExtension::new("/work", config).activate(host, &factory)
    }

    #[test]
    fn test_registers_seven_tools_in_order() {
        let mut host = FakeHost::default();
        let names = activate(&mut host, OverlayConfig::default()).unwrap();

        assert_eq!(names, ["read", "bash", "write", "edit", "grep", "find", "ls"]);
        let host_names: Vec<&str> = host.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(host_names, names);
    }

    #[test]
    fn test_factory_receives_cwd() {
        let mut host = FakeHost::default();
        let factory = FakeFactory::default();
        CollapseToolsExtension::new("/projects/app", OverlayConfig::default())
            .activate(&mut host, &factory)
            .unwrap();

        let cwds = factory.cwds.lock().unwrap();
        assert_eq!(cwds.len(), 7);
        assert!(cwds.iter().all(|c| c == Path::new("/projects/app")));
    }

    #[test]
    fn test_registered_tools_render_collapsed() {
        let mut host = FakeHost::default();
        activate(&mut host, OverlayConfig::default()).unwrap();

        let read = host.tool("read");
        assert_eq!(read.label, "READ");
        assert_eq!(
            read.render_call(&json!({"path": "/tmp/x", "offset": 10}), &PlainTheme).text,
            "read /tmp/x offset=10"
        );
        let result = ToolResult::text("contents");
        assert_eq!(read.render_result(&result, RenderOptions::collapsed(), &PlainTheme), None);
        // read carries a host renderer in the fake factory
        assert_eq!(
            read.render_result(&result, RenderOptions::expanded(), &PlainTheme).unwrap().text,
            "host read view"
        );

        let bash = host.tool("bash");
        assert_eq!(
            bash.render_result(&result, RenderOptions::expanded(), &PlainTheme).unwrap().text,
            "\ncontents"
        );
    }

    #[test]
    fn test_session_start_sends_notice() {
        let mut host = FakeHost::default();
        activate(&mut host, OverlayConfig::default()).unwrap();

        let ui = RecordingUi::default();
        host.emit(HostEvent::SessionStart, &ui);

        let notices = ui.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, "Collapse Tools: outputs hidden (Cmd+O to expand)");
        assert_eq!(notices[0].1, NotifyLevel::Info);
    }

    #[test]
    fn test_disabled_notice_is_not_subscribed() {
        let mut host = FakeHost::default();
        activate(&mut host, OverlayConfig::default().with_notice(None)).unwrap();
        assert!(host.handlers.is_empty());
    }

    #[test]
    fn test_custom_config_is_applied() {
        let mut host = FakeHost::default();
        let config = OverlayConfig::default()
            .with_running_indicator("busy")
            .with_notice(Some(SessionNotice {
                message: "hi".to_string(),
                level: NotifyLevel::Warning,
            }));
        activate(&mut host, config).unwrap();

        let out = host
            .tool("edit")
            .render_result(&ToolResult::default(), RenderOptions::partial(), &PlainTheme);
        assert_eq!(out.unwrap().text, "busy");

        let ui = RecordingUi::default();
        host.emit(HostEvent::SessionStart, &ui);
        assert_eq!(ui.notices.lock().unwrap()[0], ("hi".to_string(), NotifyLevel::Warning));
    }

    #[test]
    fn test_registration_failure_aborts() {
        let mut host = FakeHost {
            reject: Some("edit".to_string()),
            ..Default::default()
        };
        let err = activate(&mut host, OverlayConfig::default()).unwrap_err();

        let ActivationError::Registration { tool, source } = err;
        assert_eq!(tool, "edit");
        assert!(matches!(source, HostError::Rejected { .. }));
        // read, bash, write made it before the failure; no notice subscribed
        assert_eq!(host.tools.len(), 3);
        assert!(host.handlers.is_empty());
    }
}
