//! CLI entry point for lsr

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use lsr::{DirectoryWalker, JsonFormatter, LongFormatter, OutputConfig, TypeMarker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    Auto,
    /// Always use colors
    #[default]
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "List a directory and everything below it in long format")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "always")]
    color: ColorMode,

    /// Mark each entry with its real file type (d, -, l, c, b, p, s)
    /// instead of showing every non-regular file as a directory
    #[arg(long = "exact-types")]
    exact_types: bool,

    /// Output one JSON object per directory
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let walker = DirectoryWalker::new(WalkerConfig {
        max_depth: args.level,
    });

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        type_marker: if args.exact_types {
            TypeMarker::Exact
        } else {
            TypeMarker::Legacy
        },
    };

    let result = if args.json {
        walker.walk(&args.path, &mut JsonFormatter::stdout(output_config))
    } else {
        walker.walk(&args.path, &mut LongFormatter::stdout(output_config))
    };

    match result {
        Ok(_) => {}
        // Reader closed early; stop quietly
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("lsr: {}", e);
            process::exit(1);
        }
    }
}
