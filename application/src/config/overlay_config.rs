//! Overlay configuration consumed by activation

use collapse_domain::SessionNotice;

/// Default indicator shown while a tool is still running
pub const DEFAULT_RUNNING_INDICATOR: &str = "Running...";

/// Settings that shape what the overlay renders.
///
/// Built by the infrastructure config loader; defaults reproduce the
/// stock behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Text of the partial-state indicator
    pub running_indicator: String,
    /// Notice to show on session start (`None` disables it)
    pub notice: Option<SessionNotice>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            running_indicator: DEFAULT_RUNNING_INDICATOR.to_string(),
            notice: Some(SessionNotice::default()),
        }
    }
}

impl OverlayConfig {
    pub fn with_running_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.running_indicator = indicator.into();
        self
    }

    pub fn with_notice(mut self, notice: Option<SessionNotice>) -> Self {
        self.notice = notice;
        self
    }
}
