//! Rule trait for defining line-level checks.

use crate::types::Finding;

/// A style rule applied to one physical line at a time.
///
/// Rules are pure: they see the raw text of a single line, including its
/// terminator if it has one, and never any surrounding context. The file
/// path and line number are attached by the [`Scanner`](crate::Scanner).
///
/// # Example
///
/// ```ignore
/// use bashlint_core::{Finding, Rule};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "W301" }
///
///     fn check(&self, line: &str) -> Option<Finding> {
///         line.find('\t').map(|i| Finding::new(i, self.code(), "tab character"))
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "trailing-whitespace").
    fn name(&self) -> &'static str;

    /// Returns the primary defect code (e.g., "W201").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single line and returns the defect found, if any.
    fn check(&self, line: &str) -> Option<Finding>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "T001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, line: &str) -> Option<Finding> {
            line.find('!').map(|i| Finding::new(i, self.code(), "bang"))
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "T001");
        assert_eq!(rule.description(), "A test rule");
    }

    #[test]
    fn test_boxed_rule_checks_line() {
        let rule: RuleBox = Box::new(TestRule);
        assert_eq!(rule.check("echo hi"), None);
        assert_eq!(rule.check("echo hi!"), Some(Finding::new(7, "T001", "bang")));
    }
}
