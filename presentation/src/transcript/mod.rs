//! JSONL transcripts of tool invocations
//!
//! One invocation per line:
//!
//! ```json
//! {"tool": "read", "args": {"path": "/tmp/x", "offset": 10}, "result": {"content": [{"type": "text", "text": "..."}]}}
//! ```
//!
//! An entry without `result` is an invocation that is still running.

pub mod replay;

use collapse_domain::ToolResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::BufRead;
use thiserror::Error;

/// Errors while reading a transcript
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Failed to read transcript: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid transcript entry on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// A recorded tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tool: String,
    #[serde(default)]
    pub args: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ToolResult>,
}

/// Parse a JSONL transcript. Blank lines are skipped; line numbers in
/// errors are 1-based.
pub fn parse_transcript(reader: impl BufRead) -> Result<Vec<TranscriptEntry>, TranscriptError> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(&line).map_err(|source| TranscriptError::Parse {
            line: index + 1,
            source,
        })?;
        entries.push(entry);
    }
    Ok(entries)
}
