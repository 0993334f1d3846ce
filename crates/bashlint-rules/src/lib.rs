//! # bashlint-rules
//!
//! Built-in line rules for bashlint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | W201 | `trailing-whitespace` | Forbids whitespace after the last character of a line |
//! | W202 | `trailing-whitespace` | Forbids blank lines containing only whitespace |
//! | W203 | `trailing-semicolon` | Forbids a superfluous `;` at the end of a line |
//!
//! ## Usage
//!
//! ```ignore
//! use bashlint_core::Analyzer;
//! use bashlint_rules::all_rules;
//!
//! let mut builder = Analyzer::builder().root("./scripts");
//! for rule in all_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! let analyzer = builder.build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod registry;
mod trailing_semicolon;
mod trailing_whitespace;

pub use registry::all_rules;
pub use trailing_semicolon::TrailingSemicolon;
pub use trailing_whitespace::TrailingWhitespace;

/// Re-export core types for convenience.
pub use bashlint_core::{Finding, Rule, RuleBox};
