//! info command — version and build metadata.

use blamescope::{FALLBACK_RADIUS, SIGNATURE_LOOKAHEAD};

pub fn cmd_info() {
    println!("blamescope {}", env!("CARGO_PKG_VERSION"));
    println!("built:               {}", env!("BUILD_DATETIME"));
    println!("fallback radius:     {} lines", FALLBACK_RADIUS);
    println!("signature lookahead: {} lines", SIGNATURE_LOOKAHEAD);
}
