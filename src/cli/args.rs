//! CLI argument structs for all subcommands.

use clap::Parser;

#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// Source file to extract from
    pub file: String,

    /// Target line number (1-based), typically the top stack-trace frame
    pub line: u32,

    /// Output the result as JSON instead of a numbered listing
    #[arg(long)]
    pub json: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
