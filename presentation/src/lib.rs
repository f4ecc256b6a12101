//! Presentation layer for collapse-tools
//!
//! This crate contains the terminal-facing pieces: an ANSI implementation of
//! the theme port, a console host that stands in for the agent runtime, the
//! JSONL transcript replay used to preview the overlay, and the CLI
//! definition.

pub mod cli;
pub mod host;
pub mod theme;
pub mod transcript;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use host::console::{ConsoleHost, ConsoleUi, RenderedInvocation};
pub use theme::ansi::AnsiTheme;
pub use transcript::{
    TranscriptEntry, TranscriptError, parse_transcript,
    replay::{ReplayExecutor, ReplayToolFactory},
};
