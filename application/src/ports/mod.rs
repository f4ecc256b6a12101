//! Port definitions (interfaces for the host runtime and its collaborators)
//!
//! Ports define the contracts the host or its adapters must implement.
//! Implementations live in the presentation layer (console host, ANSI theme)
//! or in the host runtime itself.

pub mod host;
pub mod renderer;
pub mod theme;
pub mod tool;
