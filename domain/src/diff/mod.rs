//! Unified diff line classification
//!
//! Classification looks at the first character of a line only. File header
//! lines (`+++ b/file`, `--- a/file`) therefore count as added/removed, and
//! hunk headers (`@@ ... @@`) as context.

/// Literal tab replacement. Fixed width, not terminal-aware.
pub const TAB_EXPANSION: &str = "   ";

/// How a diff line is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffLineKind {
    Added,
    Removed,
    Context,
}

impl DiffLineKind {
    /// Classify an already tab-expanded line by its leading character
    pub fn classify(line: &str) -> Self {
        match line.as_bytes().first() {
            Some(b'+') => DiffLineKind::Added,
            Some(b'-') => DiffLineKind::Removed,
            _ => DiffLineKind::Context,
        }
    }
}

/// A single display-ready diff line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    pub text: String,
}

/// Replace every tab with [`TAB_EXPANSION`]
pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', TAB_EXPANSION)
}

/// Split a diff on `\n` and classify each line, preserving order.
///
/// A trailing newline yields a final empty context line, so rejoining the
/// lines with `\n` reproduces the original line structure.
pub fn classify_lines(diff: &str) -> impl Iterator<Item = DiffLine> + '_ {
    diff.split('\n').map(|line| {
        let text = expand_tabs(line);
        DiffLine {
            kind: DiffLineKind::classify(&text),
            text,
        }
    })
}

/// Whether a diff has anything besides whitespace
pub fn has_changes(diff: &str) -> bool {
    !diff.trim().is_empty()
}
