//! Lexical scrubber: strips string, comment, and text-block content from a
//! single source line so only structural characters remain for counting.
//!
//! The one piece of cross-line state is whether a multi-line text block
//! (`"""`) opened on a previous line is still unterminated; everything else
//! is per-line. Scrubbed output is only ever used to decide where boundaries
//! fall — it is never displayed.

/// Cross-line scrubber state.
///
/// Created fresh at the start of a counting pass, mutated only by
/// [`scrub_line`], discarded when the pass ends.
#[derive(Debug, Default, Clone)]
pub struct TextBlockState {
    /// Inside an unterminated `"""` text block opened on a prior line.
    pub active: bool,
}

/// Strip string literals, char literals, comments, and text-block bodies
/// from `line`. Quoted literals are replaced by empty literals of the same
/// kind so their contents can never be mistaken for brace characters.
/// Single pass, O(len).
#[must_use]
pub fn scrub_line(line: &str, state: &mut TextBlockState) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    // Inside an open text block only the closing delimiter matters.
    if state.active {
        match find_triple_quote(&chars, 0) {
            Some(pos) => {
                state.active = false;
                i = pos + 3;
            }
            None => return String::new(),
        }
    }

    let mut out = String::with_capacity(line.len());
    while i < chars.len() {
        match chars[i] {
            '"' if is_triple_quote(&chars, i) => {
                // Text block: removed entirely if it closes on this line,
                // otherwise the remainder is gone and the flag carries over.
                match find_triple_quote(&chars, i + 3) {
                    Some(pos) => i = pos + 3,
                    None => {
                        state.active = true;
                        return out;
                    }
                }
            }
            '"' => {
                out.push_str("\"\"");
                i = skip_quoted(&chars, i + 1, '"');
            }
            '\'' => {
                out.push_str("''");
                i = skip_quoted(&chars, i + 1, '\'');
            }
            '/' if chars.get(i + 1) == Some(&'/') => break,
            '/' if chars.get(i + 1) == Some(&'*') => {
                match find_block_comment_end(&chars, i + 2) {
                    Some(pos) => i = pos + 2,
                    // Opened but not closed on this line: drop the remainder
                    // so comment text cannot contribute braces.
                    None => break,
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn is_triple_quote(chars: &[char], i: usize) -> bool {
    chars.get(i) == Some(&'"') && chars.get(i + 1) == Some(&'"') && chars.get(i + 2) == Some(&'"')
}

fn find_triple_quote(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len()).find(|&i| is_triple_quote(chars, i))
}

fn find_block_comment_end(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(1))
        .find(|&i| chars[i] == '*' && chars[i + 1] == '/')
}

/// Advance past a quoted literal body, honoring backslash escapes.
/// Returns the index just after the closing quote (or end of line if the
/// literal never closes).
fn skip_quoted(chars: &[char], mut i: usize, quote: char) -> usize {
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    i
}
