//! Core types for findings, violations and run summaries.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A defect detected by a rule on a single line.
///
/// This is a violation without location: the rule only sees the line text,
/// so the [`Scanner`](crate::Scanner) attaches the file path and line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Character offset into the line (0-indexed).
    pub offset: usize,
    /// Code of the defect (e.g., "W201").
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(offset: usize, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            offset,
            code,
            message: message.into(),
        }
    }
}

/// A style violation found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the checked file, as produced by the walker.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Character offset into the line (0-indexed).
    pub offset: usize,
    /// Defect code (e.g., "W203").
    pub code: String,
    /// Name of the rule that produced this violation.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Binds a rule finding to its file and line.
    #[must_use]
    pub fn from_finding(
        file: impl Into<PathBuf>,
        line: usize,
        rule: impl Into<String>,
        finding: Finding,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            offset: finding.offset,
            code: finding.code.to_string(),
            rule: rule.into(),
            message: finding.message,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file.display(),
            self.line,
            self.offset,
            self.message
        )
    }
}

/// Totals for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of violations reported.
    pub violations: usize,
    /// Number of files scanned to completion.
    pub files_checked: usize,
    /// Whether traversal was stopped by an interrupt.
    pub interrupted: bool,
}

impl RunSummary {
    /// Returns true if any violation was reported.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.violations > 0
    }

    /// Process exit status for this run: 1 if anything was reported, else 0.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_violations())
    }
}
