//! The text primitive returned to the host

/// Pre-styled text plus its position inside the tool block.
///
/// Mirrors the host's `Text(content, paddingX, paddingY)` component.
/// The overlay always renders flush, so padding stays at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedText {
    pub text: String,
    pub padding_x: u16,
    pub padding_y: u16,
}

impl RenderedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            padding_x: 0,
            padding_y: 0,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

impl std::fmt::Display for RenderedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
