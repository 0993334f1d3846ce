//! The fixed set of rules run by bashlint.

use crate::{TrailingSemicolon, TrailingWhitespace};
use bashlint_core::RuleBox;

/// Returns every built-in rule, in the order violations on one line are
/// reported.
///
/// Includes:
/// - `trailing-semicolon` (W203)
/// - `trailing-whitespace` (W201, W202)
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(TrailingSemicolon::new()),
        Box::new(TrailingWhitespace::new()),
    ]
}
