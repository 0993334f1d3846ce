//! Core analyzer wiring the walker, scanner and reporter.

use crate::config::Config;
use crate::reporter::Reporter;
use crate::rule::{Rule, RuleBox};
use crate::scanner::{ScanError, Scanner};
use crate::types::RunSummary;
use crate::walker::{WalkError, Walker};

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Invalid traversal settings.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// A file could not be scanned.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    roots: Vec<PathBuf>,
    rules: Vec<RuleBox>,
    patterns: Option<Vec<String>>,
    config: Option<Config>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Adds multiple root directories.
    #[must_use]
    pub fn roots<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Overrides the file name patterns from the configuration.
    #[must_use]
    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the flag that stops traversal when raised.
    #[must_use]
    pub fn interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if a file name pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let patterns = self.patterns.unwrap_or(config.files.patterns);

        let mut walker = Walker::builder().roots(self.roots).patterns(patterns);
        if let Some(flag) = self.interrupt {
            walker = walker.interrupt(flag);
        }

        Ok(Analyzer {
            walker: walker.build()?,
            scanner: Scanner::new(self.rules),
        })
    }
}

/// The main analyzer that runs every rule over every matching file.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    walker: Walker,
    scanner: Scanner,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.scanner.rules().len()
    }

    /// Scans all matching files, streaming violations to `reporter`.
    ///
    /// Stops before the next file if the interrupt flag is raised; the
    /// returned summary then has `interrupted` set.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or the reporter fails.
    pub fn analyze(&self, reporter: &mut dyn Reporter) -> Result<RunSummary, AnalyzerError> {
        info!("Loaded {} checker(s).", self.rule_count());

        let mut summary = RunSummary::default();

        for path in self.walker.files() {
            info!("Checking {}", path.display());
            summary.violations += self.scanner.scan_file(&path, reporter)?;
            summary.files_checked += 1;
        }

        summary.interrupted = self.walker.is_interrupted();

        info!(
            "Analysis complete: {} violation(s) in {} file(s)",
            summary.violations, summary.files_checked
        );

        Ok(summary)
    }
}
