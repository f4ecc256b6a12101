//! Tool domain module
//!
//! Describes the tool invocations the overlay knows how to summarize and the
//! results it may reveal.
//!
//! ```text
//! ┌──────────────┐    ┌────────────────────┐    ┌──────────────┐
//! │ ToolKind     │───▶│ ToolInvocationArgs │    │ ToolResult   │
//! │ (name)       │    │ (call line fields) │    │ (output)     │
//! └──────────────┘    └────────────────────┘    └──────────────┘
//! ```
//!
//! # Closed set, open fallback
//!
//! Seven tool kinds get a dedicated call summary (`bash`, `read`, `write`,
//! `edit`, `grep`, `find`, `ls`). Any other name becomes
//! [`ToolKind::Other`] and its arguments are kept verbatim so they can be
//! dumped as JSON; no invocation is ever left unrendered.
//!
//! # Lenient parsing
//!
//! Arguments arrive as model-produced JSON. [`ToolInvocationArgs::from_json`]
//! never fails: wrong types are stringified, missing fields stay absent.

pub mod args;
pub mod kind;
pub mod result;

pub use args::ToolInvocationArgs;
pub use kind::ToolKind;
pub use result::{ContentItem, ToolResult};
