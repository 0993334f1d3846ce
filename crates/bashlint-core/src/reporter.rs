//! Reporters render violations to an output sink.

use crate::scanner::strip_terminator;
use crate::types::Violation;
use std::io::{self, Write};

/// Output sink for violations.
///
/// The [`Scanner`](crate::Scanner) calls [`report`](Reporter::report) once per
/// violation, as soon as it is found. Implementations must emit each record
/// as a whole: a record is either fully written or not at all.
pub trait Reporter {
    /// Emits one violation. `source_line` is the raw line it was found on.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying sink fails.
    fn report(&mut self, violation: &Violation, source_line: &str) -> io::Result<()>;

    /// Returns the number of violations reported so far.
    fn count(&self) -> usize;
}

/// Plain-text reporter.
///
/// Writes `path:line:offset: message` per violation. With `show_source`, the
/// offending line and a `^` pointer under the offset follow it.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
    show_source: bool,
    count: usize,
}

impl<W: Write> TextReporter<W> {
    /// Creates a new text reporter writing to `out`.
    #[must_use]
    pub fn new(out: W, show_source: bool) -> Self {
        Self {
            out,
            show_source,
            count: 0,
        }
    }

    /// Consumes the reporter and returns the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn format(&self, violation: &Violation, source_line: &str) -> String {
        use std::fmt::Write as _;

        let mut record = format!("{violation}\n");
        if self.show_source {
            let _ = writeln!(record, "{}", strip_terminator(source_line));
            let _ = writeln!(record, "{}^", " ".repeat(violation.offset));
        }
        record
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, violation: &Violation, source_line: &str) -> io::Result<()> {
        let record = self.format(violation, source_line);
        self.out.write_all(record.as_bytes())?;
        self.out.flush()?;
        self.count += 1;
        Ok(())
    }

    fn count(&self) -> usize {
        self.count
    }
}

/// JSON Lines reporter: one JSON object per violation.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
    count: usize,
}

impl<W: Write> JsonReporter<W> {
    /// Creates a new JSON reporter writing to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }

    /// Consumes the reporter and returns the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, violation: &Violation, _source_line: &str) -> io::Result<()> {
        let mut record = serde_json::to_string(violation)?;
        record.push('\n');
        self.out.write_all(record.as_bytes())?;
        self.out.flush()?;
        self.count += 1;
        Ok(())
    }

    fn count(&self) -> usize {
        self.count
    }
}

/// Keeps violations in memory instead of printing them.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    /// Violations in the order they were reported.
    pub violations: Vec<Violation>,
}

impl CollectingReporter {
    /// Creates an empty collecting reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, violation: &Violation, _source_line: &str) -> io::Result<()> {
        self.violations.push(violation.clone());
        Ok(())
    }

    fn count(&self) -> usize {
        self.violations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Finding;

    fn semicolon_violation() -> Violation {
        Violation::from_finding(
            "a.sh",
            1,
            "trailing-semicolon",
            Finding::new(9, "W203", "trailing semicolon"),
        )
    }

    fn render(show_source: bool, line: &str) -> String {
        let mut reporter = TextReporter::new(Vec::new(), show_source);
        reporter
            .report(&semicolon_violation(), line)
            .expect("write to Vec cannot fail");
        assert_eq!(reporter.count(), 1);
        String::from_utf8(reporter.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn text_locator_only() {
        assert_eq!(
            render(false, "echo Test;\n"),
            "a.sh:1:9: trailing semicolon\n"
        );
    }

    #[test]
    fn text_with_source_and_pointer() {
        insta::assert_snapshot!(render(true, "echo Test;\n"), @r"
        a.sh:1:9: trailing semicolon
        echo Test;
                 ^
        ");
    }

    #[test]
    fn text_source_strips_crlf() {
        let out = render(true, "echo Test;\r\n");
        assert!(out.contains("\necho Test;\n"));
        assert!(!out.contains('\r'));
    }

    #[test]
    fn text_source_without_terminator_keeps_last_char() {
        let out = render(true, "echo Test;");
        assert!(out.contains("\necho Test;\n"));
    }

    #[test]
    fn text_pointer_at_offset_zero() {
        let v = Violation::from_finding(
            "b.sh",
            3,
            "trailing-whitespace",
            Finding::new(0, "W202", "blank line contains whitespace"),
        );
        let mut reporter = TextReporter::new(Vec::new(), true);
        reporter.report(&v, "   \n").expect("write to Vec cannot fail");
        let out = String::from_utf8(reporter.into_inner()).expect("utf-8 output");
        assert_eq!(out, "b.sh:3:0: blank line contains whitespace\n   \n^\n");
    }

    #[test]
    fn json_emits_one_object_per_line() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter
            .report(&semicolon_violation(), "echo Test;\n")
            .expect("write to Vec cannot fail");
        reporter
            .report(&semicolon_violation(), "echo Test;\n")
            .expect("write to Vec cannot fail");
        assert_eq!(reporter.count(), 2);

        let out = String::from_utf8(reporter.into_inner()).expect("utf-8 output");
        let first = out.lines().next().expect("one line");
        insta::assert_snapshot!(first, @r#"{"file":"a.sh","line":1,"offset":9,"code":"W203","rule":"trailing-semicolon","message":"trailing semicolon"}"#);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn collecting_keeps_order() {
        let mut reporter = CollectingReporter::new();
        let mut second = semicolon_violation();
        second.line = 2;
        reporter.report(&semicolon_violation(), "").expect("infallible");
        reporter.report(&second, "").expect("infallible");

        assert_eq!(reporter.count(), 2);
        assert_eq!(reporter.violations[0].line, 1);
        assert_eq!(reporter.violations[1].line, 2);
    }
}
