//! Rule to forbid whitespace at the end of a line.
//!
//! # Rationale
//!
//! Trailing whitespace is superfluous and produces noisy diffs.
//!
//! # Codes
//!
//! - `W201` trailing whitespace after content
//! - `W202` a blank line that contains only whitespace

use bashlint_core::{Finding, Rule};

/// Rule code for trailing whitespace after content.
pub const CODE: &str = "W201";

/// Rule code for a whitespace-only line.
pub const BLANK_CODE: &str = "W202";

/// Rule name for trailing-whitespace.
pub const NAME: &str = "trailing-whitespace";

/// Characters treated as horizontal whitespace: space, tab, vertical tab.
const WHITESPACE: [char; 3] = [' ', '\t', '\x0b'];

/// Forbids spaces, tabs and vertical tabs before the line terminator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespace;

impl TrailingWhitespace {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TrailingWhitespace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids trailing whitespace and whitespace-only lines"
    }

    fn check(&self, line: &str) -> Option<Finding> {
        // Newlines, then carriage returns, then form feeds, each stripped in turn.
        let content = line
            .trim_end_matches('\n')
            .trim_end_matches('\r')
            .trim_end_matches('\x0c');
        let stripped = content.trim_end_matches(&WHITESPACE[..]);

        if content == stripped {
            return None;
        }

        if stripped.is_empty() {
            Some(Finding::new(0, BLANK_CODE, "blank line contains whitespace"))
        } else {
            Some(Finding::new(
                stripped.chars().count(),
                CODE,
                "trailing whitespace",
            ))
        }
    }
}
