//! Domain layer for collapse-tools
//!
//! This crate contains the pure types behind the tool-output overlay:
//! which tool was invoked, with which arguments, what it returned, and
//! which UI state the host is asking us to render.
//! It has no dependencies on the host runtime, terminal styling or I/O.
//!
//! # Core Concepts
//!
//! ## Call line
//!
//! Every tool invocation is summarized on a single, always-visible line:
//! the tool name followed by its key parameters ([`ToolInvocationArgs`]).
//!
//! ## Collapsed output
//!
//! Results are hidden unless the host reports the invocation as expanded
//! ([`RenderOptions`] / [`RenderState`]). Edit results are shown as a
//! classified unified diff ([`DiffLineKind`]).

pub mod config;
pub mod core;
pub mod diff;
pub mod render;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode};
pub use crate::core::error::DomainError;
pub use diff::{DiffLine, DiffLineKind, TAB_EXPANSION, classify_lines, expand_tabs, has_changes};
pub use render::{
    options::{RenderOptions, RenderState},
    style::StyleToken,
    text::RenderedText,
};
pub use session::{NotifyLevel, SessionNotice};
pub use tool::{
    args::{BashArgs, FindArgs, GrepArgs, LsArgs, PathArgs, ReadArgs, ToolInvocationArgs},
    kind::ToolKind,
    result::{ContentItem, ToolResult},
};
