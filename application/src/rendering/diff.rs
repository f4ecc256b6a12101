//! Diff formatting for expanded edit results

use crate::ports::theme::Theme;
use collapse_domain::{DiffLineKind, StyleToken, classify_lines};

/// Colorizes a unified diff line by line.
pub struct DiffFormatter;

impl DiffFormatter {
    /// Style each line by its leading character, tabs expanded to three
    /// spaces, line structure preserved.
    pub fn format(diff: &str, theme: &dyn Theme) -> String {
        classify_lines(diff)
            .map(|line| theme.fg(Self::token(line.kind), &line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn token(kind: DiffLineKind) -> StyleToken {
        match kind {
            DiffLineKind::Added => StyleToken::ToolDiffAdded,
            DiffLineKind::Removed => StyleToken::ToolDiffRemoved,
            DiffLineKind::Context => StyleToken::ToolDiffContext,
        }
    }
}
