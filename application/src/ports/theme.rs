//! Theme port
//!
//! The theme is threaded through every render call instead of living in a
//! global, so the same renderer can style for a color terminal, a plain log
//! or a test recorder.

use collapse_domain::StyleToken;

/// Named styling operations supplied by the host.
pub trait Theme: Send + Sync {
    /// Apply the foreground style behind `token`
    fn fg(&self, token: StyleToken, text: &str) -> String;

    /// Embolden text
    fn bold(&self, text: &str) -> String;
}

/// Theme that returns text untouched (no-color terminals, logs)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn fg(&self, _token: StyleToken, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }
}
