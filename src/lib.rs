//! # blamescope — method-boundary code context extraction
//!
//! Given the text of a source file and a 1-based line number (typically the
//! top frame of a stack trace), locate the enclosing method and return its
//! exact text with absolute line numbers. The engine is a heuristic line
//! scanner: it tolerates multi-line signatures, annotations, nested braces,
//! comments, and text blocks without building a parse tree.
//!
//! ## Library usage
//!
//! This crate is primarily a CLI tool, but the extraction engine is exposed
//! as a library for benchmarking and integration testing.

pub mod context;
pub mod error;
pub mod render;

pub use context::{CodeContext, FALLBACK_RADIUS, SIGNATURE_LOOKAHEAD, code_context};
pub use error::ContextError;

/// Read a file as a String, using lossy UTF-8 conversion for non-UTF8 files.
/// Returns `(content, was_lossy)` where `was_lossy` is true if replacement
/// characters were inserted. Stack traces routinely point into legacy files
/// with Windows-1252 characters in comments; those must still resolve.
pub fn read_file_lossy(path: &std::path::Path) -> std::io::Result<(String, bool)> {
    let raw = std::fs::read(path)?;
    match String::from_utf8(raw) {
        Ok(s) => Ok((s, false)),
        Err(e) => Ok((String::from_utf8_lossy(e.as_bytes()).into_owned(), true)),
    }
}

#[cfg(test)]
mod lib_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file_lossy_utf8() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "void check() {{}}").unwrap();
        let (content, was_lossy) = read_file_lossy(f.path()).unwrap();
        assert_eq!(content, "void check() {}");
        assert!(!was_lossy);
    }

    #[test]
    fn test_read_file_lossy_invalid_utf8() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        // 0x93/0x94 are Windows-1252 smart quotes, invalid as UTF-8
        f.write_all(b"// \x93quoted\x94\nint x;\n").unwrap();
        let (content, was_lossy) = read_file_lossy(f.path()).unwrap();
        assert!(was_lossy);
        assert!(content.contains("int x;"));
    }

    #[test]
    fn test_read_file_lossy_missing_file() {
        let err = read_file_lossy(std::path::Path::new("/nonexistent/Foo.java"));
        assert!(err.is_err());
    }
}
