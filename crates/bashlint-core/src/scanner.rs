//! Scanner applying every rule to every line of a file.

use crate::reporter::Reporter;
use crate::rule::RuleBox;
use crate::types::Violation;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while scanning a file.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be read (missing, permission denied, not UTF-8).
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The reporter failed to write a violation.
    #[error("Failed to report violation: {0}")]
    Report(#[source] std::io::Error),
}

/// Splits text into physical lines, each keeping its `\n` terminator.
///
/// The last line has no terminator when the text does not end with one.
/// Empty text yields no lines.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

/// Removes a trailing `\n` or `\r\n` from a line.
#[must_use]
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

/// Applies a fixed, ordered set of rules to lines of text.
pub struct Scanner {
    rules: Vec<RuleBox>,
}

impl Scanner {
    /// Creates a scanner over the given rules, kept in registration order.
    #[must_use]
    pub fn new(rules: Vec<RuleBox>) -> Self {
        Self { rules }
    }

    /// Returns the registered rules.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Scans lines of one file, streaming each violation to `reporter`.
    ///
    /// Lines are numbered from 1. On each line every rule runs, in
    /// registration order, whether or not an earlier rule matched.
    ///
    /// Returns the number of violations reported.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Report`] if the reporter fails to write.
    pub fn scan_lines<'a, I>(
        &self,
        path: &Path,
        lines: I,
        reporter: &mut dyn Reporter,
    ) -> Result<usize, ScanError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut reported = 0;

        for (index, line) in lines.into_iter().enumerate() {
            for rule in &self.rules {
                let Some(finding) = rule.check(line) else {
                    continue;
                };

                let violation = Violation::from_finding(path, index + 1, rule.name(), finding);
                reporter
                    .report(&violation, line)
                    .map_err(ScanError::Report)?;
                reported += 1;
            }
        }

        Ok(reported)
    }

    /// Reads a file completely and scans its lines.
    ///
    /// The file is closed before scanning starts.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Read`] if the file cannot be read as UTF-8 text,
    /// or [`ScanError::Report`] if the reporter fails.
    pub fn scan_file(&self, path: &Path, reporter: &mut dyn Reporter) -> Result<usize, ScanError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScanError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let reported = self.scan_lines(path, split_lines(&content), reporter)?;
        debug!("{}: {} violation(s)", path.display(), reported);
        Ok(reported)
    }
}
