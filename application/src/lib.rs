//! Application layer for collapse-tools
//!
//! This crate contains the rendering logic of the overlay, the ports through
//! which it talks to the host runtime, and the activation use case that wires
//! the seven built-in tools to the collapsed renderers.
//! It depends only on the domain layer.
//!
//! ```text
//! host factory ──▶ ToolImplementation ──▶ ToolAdapter ──▶ ToolRegistration ──▶ host
//!                                              │
//!                        ToolCallRenderer ◀────┤
//!                CollapsibleResultRenderer ◀───┘──▶ DiffFormatter / fallback
//! ```

pub mod config;
pub mod ports;
pub mod rendering;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::OverlayConfig;
pub use ports::{
    host::{
        EventContext, EventHandler, ExtensionHost, HostError, HostEvent, ToolRegistration,
        UserInterface,
    },
    renderer::{CallRenderer, ResultRenderer},
    theme::{PlainTheme, Theme},
    tool::{ToolExecutionError, ToolExecutor, ToolFactory, ToolImplementation},
};
pub use rendering::{
    call::ToolCallRenderer, diff::DiffFormatter, result::CollapsibleResultRenderer,
};
pub use use_cases::{
    activate::{ActivationError, CollapseToolsExtension},
    adapt_tool::ToolAdapter,
    session_notifier::SessionNotifier,
};
