//! Method-boundary extraction: locate the enclosing method around a target
//! line and return its exact source text with absolute line numbers.
//!
//! The engine works on line-level heuristics only — a backward scan finds
//! the signature, a bounded forward scan finds where the signature ends,
//! preceding annotations are merged in, and a scrubbed brace count finds the
//! body end. When no boundary can be determined the result degrades to a
//! fixed window around the target. Purely synchronous and re-entrant: all
//! state is local to one call.

mod body;
mod scrub;
mod signature;

pub use body::{fallback_window, resolve_body_end};
pub use scrub::{TextBlockState, scrub_line};
pub use signature::{locate_signature_start, merge_annotations, resolve_signature_end};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ContextError;

/// Forward lookahead cap when resolving where a signature ends. Bounds the
/// cost of scanning malformed input.
pub const SIGNATURE_LOOKAHEAD: usize = 30;

/// Half-height of the window returned when no method boundary is found.
pub const FALLBACK_RADIUS: usize = 50;

/// The resolved code slice around a target line.
///
/// `code` is the verbatim original text of lines `start_line..=end_line`
/// (1-based, inclusive) joined with newlines — scrubbing decides where the
/// boundaries fall but never leaks into the output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeContext {
    pub code: String,
    #[serde(rename = "startLine")]
    pub start_line: u32,
    #[serde(rename = "endLine")]
    pub end_line: u32,
}

/// Extract the code context enclosing `target_line` (1-based).
///
/// Returns the full method when one can be located, otherwise a
/// [`FALLBACK_RADIUS`] window around the target. Fails only when the target
/// line is outside the file.
pub fn code_context(file_text: &str, target_line: u32) -> Result<CodeContext, ContextError> {
    let lines: Vec<&str> = file_text.lines().collect();
    if target_line == 0 || target_line as usize > lines.len() {
        return Err(ContextError::LineOutOfRange {
            line: target_line,
            total: lines.len(),
        });
    }
    let target = (target_line - 1) as usize;

    let (start, end) = match resolve_method_bounds(&lines, target) {
        Some(bounds) => bounds,
        None => {
            debug!(line = target_line, "no method boundary found, using fallback window");
            fallback_window(lines.len(), target, FALLBACK_RADIUS)
        }
    };

    Ok(CodeContext {
        code: lines[start..=end].join("\n"),
        start_line: (start + 1) as u32,
        end_line: (end + 1) as u32,
    })
}

/// Run the locate → span → annotations → body pipeline. `None` means no
/// recognizable method encloses the target.
fn resolve_method_bounds(lines: &[&str], target: usize) -> Option<(usize, usize)> {
    let sig_start = locate_signature_start(lines, target)?;
    let sig_end = resolve_signature_end(lines, sig_start)?;
    let mut start = merge_annotations(lines, sig_start);
    let end = resolve_body_end(lines, sig_end);

    // The backward scan can latch onto a previous method whose body closes
    // before the target (file-level declarations between methods).
    if target > end {
        return None;
    }

    // The merge can absorb lines that only look like annotations; re-scan
    // the resolved range for the first true signature line and re-anchor the
    // reported start on it.
    if let Some(true_sig) = (start..=end).find(|&i| signature::is_signature_line(lines[i])) {
        if true_sig != sig_start {
            start = merge_annotations(lines, true_sig);
        }
    }

    debug!(start = start + 1, end = end + 1, "method boundary resolved");
    Some((start, end))
}
