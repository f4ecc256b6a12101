//! Session-start notice

use crate::ports::host::{EventContext, EventHandler, HostEvent};
use collapse_domain::SessionNotice;
use tracing::debug;

/// Sends a fixed notice through the host UI when a session starts.
///
/// Fire-and-forget: no retry and no acknowledgment tracking. The host
/// delivers one session-start event per session, and each produces one
/// notice.
#[derive(Debug, Clone, Default)]
pub struct SessionNotifier {
    notice: SessionNotice,
}

impl SessionNotifier {
    pub fn new(notice: SessionNotice) -> Self {
        Self { notice }
    }

    pub fn notice(&self) -> &SessionNotice {
        &self.notice
    }
}

impl EventHandler for SessionNotifier {
    fn handle(&self, event: HostEvent, ctx: &EventContext<'_>) {
        if event != HostEvent::SessionStart {
            return;
        }
        debug!(
            level = %self.notice.level,
            cwd = %ctx.cwd.display(),
            "Sending session notice"
        );
        ctx.ui.notify(&self.notice.message, self.notice.level);
    }
}
