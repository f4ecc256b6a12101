//! The overlay's renderers.
//!
//! - [`call::ToolCallRenderer`]: one-line invocation summary per tool kind
//! - [`result::CollapsibleResultRenderer`]: partial / collapsed / expanded output
//! - [`diff::DiffFormatter`]: colorized unified diff for edit results

pub mod call;
pub mod diff;
pub mod result;
