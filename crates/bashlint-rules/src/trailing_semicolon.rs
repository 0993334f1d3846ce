//! Rule to forbid a superfluous semicolon at the end of a line.
//!
//! # Rationale
//!
//! A command terminated by the end of the line needs no `;`.
//!
//! # Exceptions
//!
//! Two idioms require the trailing semicolon and are accepted:
//!
//! - `;;` terminating a `case` branch
//! - `\;` terminating `find -exec` arguments
//!
//! The accepted pattern is tested first and vetoes the violation pattern.

use bashlint_core::{Finding, Rule};
use regex::Regex;

/// Rule code for trailing-semicolon.
pub const CODE: &str = "W203";

/// Rule name for trailing-semicolon.
pub const NAME: &str = "trailing-semicolon";

/// Forbids a single `;` as the last non-whitespace character of a line.
#[derive(Debug, Clone)]
pub struct TrailingSemicolon {
    accepted: Regex,
    violation: Regex,
}

impl Default for TrailingSemicolon {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailingSemicolon {
    /// Creates a new rule.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            accepted: Regex::new(r"(?:;;|\\;)\s*$").expect("Invalid regex"),
            violation: Regex::new(r";\s*$").expect("Invalid regex"),
        }
    }
}

impl Rule for TrailingSemicolon {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids trailing semicolons outside `;;` and `\\;`"
    }

    fn check(&self, line: &str) -> Option<Finding> {
        if self.accepted.is_match(line) || !self.violation.is_match(line) {
            return None;
        }

        let index = line.rfind(';')?;
        let offset = line[..index].chars().count();
        Some(Finding::new(offset, CODE, "trailing semicolon"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(line: &str) -> Option<Finding> {
        TrailingSemicolon::new().check(line)
    }

    #[test]
    fn test_accepted_lines() {
        for line in [
            "",
            "echo Test",
            "echo Test; echo Test2",
            " ;; ",
            "    ;;\n",
            r"find -type f -exec cat {} \;",
            "find . -exec rm {} \\;  \n",
        ] {
            assert_eq!(check(line), None, "line: {line:?}");
        }
    }

    #[test]
    fn test_violation_offsets() {
        let cases = [
            (";", 0),
            ("    ;", 4),
            ("echo Test;", 9),
            ("echo Test;  ", 9),
            ("echo Test; echo Test2;", 21),
            ("echo Test;\n", 9),
            ("echo Test;\r\n", 9),
        ];

        for (line, offset) in cases {
            let finding = check(line).unwrap_or_else(|| panic!("expected violation for {line:?}"));
            assert_eq!(finding.offset, offset, "line: {line:?}");
            assert_eq!(finding.code, "W203");
            assert_eq!(finding.message, "trailing semicolon");
        }
    }

    #[test]
    fn test_offset_counts_characters() {
        let finding = check("echo ünïcode;").expect("violation");
        assert_eq!(finding.offset, 12);
    }

    #[test]
    fn test_semicolon_inside_line_only() {
        assert_eq!(check("for i in 1 2; do echo $i; done"), None);
    }
}
