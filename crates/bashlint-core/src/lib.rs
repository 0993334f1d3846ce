//! # bashlint-core
//!
//! Core framework for line-level style checking of shell scripts.
//!
//! This crate provides the foundational traits and types for building
//! the checker pipeline. It includes:
//!
//! - [`Rule`] trait for single-line rules
//! - [`Scanner`] for applying every rule to every line of a file
//! - [`Reporter`] trait and the text, JSON and collecting reporters
//! - [`Walker`] for enumerating matching files under root directories
//! - [`Analyzer`] for wiring the walker, scanner and reporter together
//!
//! ## Example
//!
//! ```ignore
//! use bashlint_core::{Analyzer, TextReporter};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./scripts")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let mut reporter = TextReporter::new(std::io::stdout(), true);
//! let summary = analyzer.analyze(&mut reporter)?;
//! std::process::exit(summary.exit_code());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod reporter;
mod rule;
mod scanner;
mod types;
mod walker;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, FilesConfig, OutputConfig, CONFIG_FILE_NAMES};
pub use reporter::{CollectingReporter, JsonReporter, Reporter, TextReporter};
pub use rule::{Rule, RuleBox};
pub use scanner::{split_lines, strip_terminator, ScanError, Scanner};
pub use types::{Finding, RunSummary, Violation};
pub use walker::{WalkError, Walker, WalkerBuilder, DEFAULT_PATTERNS};
