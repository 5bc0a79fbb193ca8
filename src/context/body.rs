//! Body extent resolution: scrubbed brace counting from the signature end,
//! plus the fixed-radius fallback window used when detection misses.

use super::scrub::{TextBlockState, scrub_line};

/// Find the line where the method body closes (0-based, inclusive).
///
/// A signature line terminated by `;` with no opening brace is a bodyless
/// declaration and ends at itself. Otherwise nesting depth is counted over
/// scrubbed lines, so braces inside strings and comments never count; the
/// body ends where depth first returns to zero after having been positive.
/// Truncated input (EOF with depth still positive) ends at the last line.
#[must_use]
pub fn resolve_body_end(lines: &[&str], signature_end: usize) -> usize {
    let mut state = TextBlockState::default();
    let mut depth: i64 = 0;
    let mut opened = false;

    for (offset, line) in lines[signature_end..].iter().enumerate() {
        let scrubbed = scrub_line(line, &mut state);
        if offset == 0 && !scrubbed.contains('{') && scrubbed.trim_end().ends_with(';') {
            return signature_end;
        }
        for c in scrubbed.chars() {
            match c {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        if opened && depth <= 0 {
            return signature_end + offset;
        }
    }
    lines.len() - 1
}

/// Symmetric window of `radius` lines on each side of `target` (0-based),
/// clamped to file bounds. Returns inclusive (start, end).
#[must_use]
pub fn fallback_window(total_lines: usize, target: usize, radius: usize) -> (usize, usize) {
    let start = target.saturating_sub(radius);
    let end = (target + radius).min(total_lines.saturating_sub(1));
    (start, end)
}
