//! ANSI terminal theme backed by `colored`

use collapse_application::Theme;
use collapse_domain::{ConfigIssue, ConfigIssueCode, StyleToken};
use colored::{Color, Colorize};
use std::collections::BTreeMap;

/// Maps style tokens to terminal colors.
#[derive(Debug, Clone)]
pub struct AnsiTheme {
    palette: BTreeMap<StyleToken, Color>,
    enabled: bool,
}

impl Default for AnsiTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiTheme {
    /// Colored theme with the default palette
    pub fn new() -> Self {
        let palette = StyleToken::ALL
            .into_iter()
            .map(|token| (token, Self::default_color(token)))
            .collect();
        Self {
            palette,
            enabled: true,
        }
    }

    /// Theme that emits no escape codes
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn with_color(mut self, token: StyleToken, color: Color) -> Self {
        self.palette.insert(token, color);
        self
    }

    /// Build from config: overrides are color names (`"bright cyan"`) or
    /// `#rrggbb`. Unresolvable names keep the default and are reported.
    pub fn from_config(
        enabled: bool,
        overrides: &BTreeMap<StyleToken, String>,
    ) -> (Self, Vec<ConfigIssue>) {
        let mut theme = if enabled { Self::new() } else { Self::plain() };
        let mut issues = Vec::new();

        for (token, name) in overrides {
            match parse_color(name) {
                Some(color) => theme = theme.with_color(*token, color),
                None => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownColor {
                        token: token.as_str().to_string(),
                        value: name.clone(),
                    },
                    format!(
                        "theme.colors.{}: unknown color '{}', using default",
                        token, name
                    ),
                )),
            }
        }

        (theme, issues)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn color(&self, token: StyleToken) -> Color {
        self.palette
            .get(&token)
            .copied()
            .unwrap_or_else(|| Self::default_color(token))
    }

    fn default_color(token: StyleToken) -> Color {
        match token {
            StyleToken::ToolTitle => Color::BrightWhite,
            StyleToken::Muted => Color::White,
            StyleToken::Dim => Color::BrightBlack,
            StyleToken::Accent => Color::Cyan,
            StyleToken::ToolDiffAdded => Color::Green,
            StyleToken::ToolDiffRemoved => Color::Red,
            StyleToken::ToolDiffContext => Color::BrightBlack,
            StyleToken::ToolOutput => Color::White,
        }
    }
}

impl Theme for AnsiTheme {
    fn fg(&self, token: StyleToken, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(self.color(token)).to_string()
    }

    fn bold(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.bold().to_string()
    }
}

/// Parse a color name understood by `colored`, or `#rrggbb`
fn parse_color(name: &str) -> Option<Color> {
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some(Color::TrueColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }
    name.parse::<Color>().ok()
}
