//! Unified error type for context extraction.

use thiserror::Error;

/// All errors that can occur while resolving a code context.
#[derive(Error, Debug)]
pub enum ContextError {
    /// I/O error (file read)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Target line outside the file. Surfaced to the caller rather than
    /// silently clamped — an out-of-range frame means the blamed revision
    /// does not match the fetched file.
    #[error("Line {line} is out of range: file has {total} lines")]
    LineOutOfRange { line: u32, total: usize },
}
