//! Method-boundary code context extraction for stack-trace analysis.
//!
//! Binary crate entry point. All CLI logic is in the `cli` module.

// mimalloc as global allocator — returns freed pages to the OS promptly,
// which matters when large source files are read and dropped per call.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod cli;

fn main() {
    cli::run();
}
