//! bashlint CLI tool.
//!
//! Usage:
//! ```bash
//! bashlint [OPTIONS] [PATH]...
//! bashlint --list-rules
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod interrupt;

/// Style checker for shell scripts
#[derive(Parser)]
#[command(name = "bashlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase diagnostic output (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show the offending source line and a pointer under each violation
    #[arg(short, long)]
    show_source: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File name glob to check (can be specified multiple times, default: *.sh)
    #[arg(short, long = "pattern")]
    patterns: Vec<String>,

    /// List available rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Directories to check (default: current directory)
    paths: Vec<PathBuf>,
}

/// Output format for violations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `path:line:offset: message` per violation.
    #[default]
    Text,
    /// One JSON object per violation.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.list_rules {
        commands::list_rules::run();
        return Ok(());
    }

    commands::check::run(commands::check::CheckArgs {
        paths: cli.paths,
        patterns: cli.patterns,
        show_source: cli.show_source,
        format: cli.format,
        config: cli.config,
    })
}
