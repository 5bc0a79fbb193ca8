//! Display rendering for a resolved code context.
//!
//! Produces the numbered listing handed to downstream consumers: absolute
//! line numbers, the original text, and a `>` marker on the target line.

use crate::context::CodeContext;

/// Render `ctx` with right-aligned absolute line numbers, marking
/// `target_line` with `>`.
#[must_use]
pub fn render_numbered(ctx: &CodeContext, target_line: u32) -> String {
    let width = ctx.end_line.to_string().len();
    let mut out = String::with_capacity(ctx.code.len() * 2);
    for (offset, line) in ctx.code.split('\n').enumerate() {
        let number = ctx.start_line + offset as u32;
        let marker = if number == target_line { '>' } else { ' ' };
        out.push_str(&format!("{marker} {number:>width$} | {line}\n"));
    }
    out
}
