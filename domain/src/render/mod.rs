//! Render-side value objects: UI state snapshots, style tokens and the
//! text primitive handed back to the host.

pub mod options;
pub mod style;
pub mod text;

pub use options::{RenderOptions, RenderState};
pub use style::StyleToken;
pub use text::RenderedText;
