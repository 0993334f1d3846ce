//! Check command implementation.

use anyhow::{Context, Result};
use bashlint_core::{Analyzer, Config, JsonReporter, Reporter, TextReporter};
use bashlint_rules::all_rules;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// Arguments for the check command.
pub struct CheckArgs {
    /// Directories to traverse.
    pub paths: Vec<PathBuf>,
    /// File name globs overriding the configured ones, if non-empty.
    pub patterns: Vec<String>,
    /// Force source context on.
    pub show_source: bool,
    /// Output format.
    pub format: OutputFormat,
    /// Explicit configuration file from `--config`.
    pub config: Option<PathBuf>,
}

/// Runs the check command.
///
/// Exits the process with status 1 if any violation was reported.
pub fn run(args: CheckArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let show_source = args.show_source || config.output.show_source;

    let mut builder = Analyzer::builder()
        .roots(args.paths)
        .config(config)
        .interrupt(crate::interrupt::install());

    if !args.patterns.is_empty() {
        builder = builder.patterns(args.patterns);
    }

    for rule in all_rules() {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Invalid configuration")?;

    let stdout = io::stdout().lock();
    let mut reporter: Box<dyn Reporter> = match args.format {
        OutputFormat::Text => Box::new(TextReporter::new(stdout, show_source)),
        OutputFormat::Json => Box::new(JsonReporter::new(stdout)),
    };

    let summary = analyzer
        .analyze(reporter.as_mut())
        .context("Analysis failed")?;
    drop(reporter);

    if summary.interrupted {
        write_stopped_notice(args.format, &mut io::stdout(), &mut io::stderr())?;
    }

    if summary.has_violations() {
        std::process::exit(summary.exit_code());
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    Config::discover(Path::new("."), explicit).context("Failed to load config")
}

/// JSON output keeps stdout to one object per line, so the notice goes to
/// stderr there.
fn write_stopped_notice<'a>(
    format: OutputFormat,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
) -> io::Result<()> {
    let target = match format {
        OutputFormat::Text => out,
        OutputFormat::Json => err,
    };
    writeln!(target, "... stopped")?;
    target.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_notice_follows_text_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_stopped_notice(OutputFormat::Text, &mut out, &mut err).expect("write");
        assert_eq!(out, b"... stopped\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_stopped_notice_stays_off_json_stream() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_stopped_notice(OutputFormat::Json, &mut out, &mut err).expect("write");
        assert!(out.is_empty());
        assert_eq!(err, b"... stopped\n");
    }
}
