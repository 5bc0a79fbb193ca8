//! Signature detection over Java-family source lines: backward location of
//! the declaration header, forward resolution of where it ends, and merging
//! of preceding annotation lines.
//!
//! Declarations may omit an explicit modifier (package visibility), so two
//! patterns are tried. Telling a modifier-less declaration apart from a call
//! expression is the main false-positive risk; that decision lives in
//! [`is_plain_declaration`] so it can be tuned and tested on its own.

use std::sync::LazyLock;

use regex::Regex;

use super::SIGNATURE_LOOKAHEAD;
use super::scrub::{TextBlockState, scrub_line};

// ─── Line patterns ──────────────────────────────────────────────────

/// Modifier-led declaration: optional same-line annotations, at least one
/// modifier keyword, then a type/name run reaching a parameter list. The
/// char class excludes `=` and `;` so field initializers never reach the
/// paren.
static MODIFIER_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:@[\w.]+(?:\([^)]*\))?\s+)*(?:(?:public|private|protected|static|final|synchronized|native|abstract|default|strictfp)\s+)+[\w<>\[\],\s.?&]*\b\w+\s*\(",
    )
    .unwrap()
});

/// Modifier-less declaration: optional generic type parameters, a return
/// type (primitive keyword or capitalized type with optional generics/array
/// brackets), an identifier, and an opening paren.
static PLAIN_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:<[\w\s,?&]+>\s+)?(?:void|boolean|byte|char|short|int|long|float|double|[A-Z]\w*)(?:<[^>]*>)?(?:\[\])*\s+(\w+)\s*\(",
    )
    .unwrap()
});

/// Statement keywords that can be followed by a paren but never start a
/// declaration.
static CONTROL_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:if|while|for|switch|else|return|throw|case|new)\b").unwrap());

/// A line that is nothing but an annotation, with optional arguments.
static ANNOTATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@[\w.]+(?:\([^)]*\))?\s*$").unwrap());

// ─── Declaration predicates ─────────────────────────────────────────

/// Does this line start a method declaration?
#[must_use]
pub(crate) fn is_signature_line(line: &str) -> bool {
    MODIFIER_DECL.is_match(line) || is_plain_declaration(line)
}

/// Package-visibility declaration vs. call expression.
///
/// `ResponseEntity handle(Request r) {` is a declaration; `builder.handle(r);`
/// and `String name = getName();` are statements. Heuristic by nature.
#[must_use]
pub(crate) fn is_plain_declaration(line: &str) -> bool {
    if CONTROL_KEYWORD.is_match(line) {
        return false;
    }
    let Some(caps) = PLAIN_DECL.captures(line) else {
        return false;
    };
    let m = caps.get(0).expect("whole-pattern group always present");
    // An assignment anywhere before the parameter list means a statement.
    if line[..m.end()].contains('=') {
        return false;
    }
    // A `.` right before the method name means a chained invocation.
    let name = caps.get(1).expect("identifier group always present");
    !line[..name.start()].trim_end().ends_with('.')
}

// ─── Backward signature location ────────────────────────────────────

/// Scan backward from `target` (0-based) for the line where the enclosing
/// method signature begins. Blank and line-comment lines are skipped; block
/// comments are transparent (a lone `*/` jumps the scan above its `/*`).
#[must_use]
pub fn locate_signature_start(lines: &[&str], target: usize) -> Option<usize> {
    let mut i = target as isize;
    while i >= 0 {
        let line = lines[i as usize];
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            i -= 1;
            continue;
        }
        if trimmed.contains("*/") && !trimmed.contains("/*") {
            let mut j = i - 1;
            while j >= 0 && !lines[j as usize].contains("/*") {
                j -= 1;
            }
            i = j - 1;
            continue;
        }
        if is_signature_line(line) {
            return Some(i as usize);
        }
        i -= 1;
    }
    None
}

// ─── Forward span resolution ────────────────────────────────────────

/// Scan forward from the signature start for the line where the signature
/// finishes: either a body-opening `{` or a terminating `;` on a line that
/// looks like a genuine bodyless declaration. Bounded by
/// [`SIGNATURE_LOOKAHEAD`] to keep malformed input cheap.
#[must_use]
pub fn resolve_signature_end(lines: &[&str], signature_start: usize) -> Option<usize> {
    let limit = (signature_start + SIGNATURE_LOOKAHEAD).min(lines.len() - 1);
    for idx in signature_start..=limit {
        let scrubbed = scrub_line(lines[idx], &mut TextBlockState::default());
        if scrubbed.contains('{') {
            return Some(idx);
        }
        if scrubbed.trim_end().ends_with(';') && is_bodyless_terminator(&scrubbed) {
            return Some(idx);
        }
    }
    None
}

/// A `;`-terminated line counts as a declaration end only with a matched
/// paren pair, no call-dot before the paren, and no assignment.
fn is_bodyless_terminator(scrubbed: &str) -> bool {
    let (Some(open), Some(close)) = (scrubbed.find('('), scrubbed.rfind(')')) else {
        return false;
    };
    if close < open || scrubbed[..open].contains('=') {
        return false;
    }
    let before_name = scrubbed[..open].trim_end_matches(|c: char| c.is_alphanumeric() || c == '_');
    !before_name.trim_end().ends_with('.')
}

// ─── Annotation merging ─────────────────────────────────────────────

/// Extend the detected start upward over a contiguous run of annotation-only
/// lines. A blank line or a comment breaks the run.
#[must_use]
pub fn merge_annotations(lines: &[&str], signature_start: usize) -> usize {
    let mut start = signature_start;
    while start > 0 && ANNOTATION_LINE.is_match(lines[start - 1]) {
        start -= 1;
    }
    start
}
