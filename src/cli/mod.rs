//! CLI layer: argument parsing, command dispatch, and subcommand
//! implementations.

pub mod args;
mod info;

pub use args::*;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use blamescope::context::code_context;
use blamescope::render::render_numbered;
use blamescope::{ContextError, read_file_lossy};

// ─── CLI ─────────────────────────────────────────────────────────────

/// Method-boundary code context extraction for stack-trace analysis
#[derive(Parser, Debug)]
#[command(name = "blamescope", version, about, after_help = "\
Run 'blamescope <COMMAND> --help' for detailed options.\n\
Typical use: blamescope context src/main/java/App.java 142")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Extract the method enclosing a line of a source file
    Context(ContextArgs),

    /// Show version and build information
    Info,
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Context(args) => {
            init_logging(&args.log_level);
            cmd_context(&args)
        }
        Commands::Info => {
            info::cmd_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    let log_level = match level {
        "error" => tracing::Level::ERROR,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

// ─── context command ────────────────────────────────────────────────

fn cmd_context(args: &ContextArgs) -> Result<(), ContextError> {
    let (content, was_lossy) = read_file_lossy(Path::new(&args.file))?;
    if was_lossy {
        warn!(file = %args.file, "file was not valid UTF-8, read lossily");
    }
    debug!(file = %args.file, line = args.line, "extracting context");

    let ctx = code_context(&content, args.line)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ctx).unwrap());
    } else {
        print!("{}", render_numbered(&ctx, args.line));
        eprintln!(
            "\n{}:{}-{} ({} lines)",
            args.file,
            ctx.start_line,
            ctx.end_line,
            ctx.end_line - ctx.start_line + 1
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_context_command() {
        let cli = Cli::try_parse_from(["blamescope", "context", "App.java", "142"]).unwrap();
        match cli.command {
            Commands::Context(args) => {
                assert_eq!(args.file, "App.java");
                assert_eq!(args.line, 142);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_json_flag() {
        let cli =
            Cli::try_parse_from(["blamescope", "context", "App.java", "7", "--json"]).unwrap();
        match cli.command {
            Commands::Context(args) => assert!(args.json),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_missing_line() {
        assert!(Cli::try_parse_from(["blamescope", "context", "App.java"]).is_err());
    }

    #[test]
    fn test_cmd_context_reads_real_file() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "void check() {{\n    run();\n}}\n").unwrap();
        let args = ContextArgs {
            file: f.path().to_string_lossy().into_owned(),
            line: 2,
            json: true,
            log_level: "warn".to_string(),
        };
        assert!(cmd_context(&args).is_ok());
    }

    #[test]
    fn test_cmd_context_missing_file_errors() {
        let args = ContextArgs {
            file: "/nonexistent/App.java".to_string(),
            line: 1,
            json: false,
            log_level: "warn".to_string(),
        };
        assert!(matches!(cmd_context(&args), Err(ContextError::Io(_))));
    }
}
