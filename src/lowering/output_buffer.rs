//! Output buffer
//!
//! Ordered, append-only list of emitted Go lines for one translation,
//! together with the diagnostics of every marked line.

use tracing::warn;

use crate::diagnostics::Diagnostic;
use crate::helpers::COMMENT_LINE;

#[derive(Debug, Default)]
pub struct OutputBuffer {
    lines: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Emit `line` behind the diagnostic marker and record why
    pub fn push_marked(&mut self, line: &str, diagnostic: Diagnostic) {
        warn!(line = diagnostic.line, kind = %diagnostic.kind, "not translated");
        self.lines.push(format!("{}{}", COMMENT_LINE, line));
        self.diagnostics.push(diagnostic);
    }

    /// Close a `type (` or `const (` group
    pub fn close_group(&mut self) {
        self.lines.push(")".to_string());
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Diagnostic>) {
        (self.lines, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_marked_line() {
        let mut out = OutputBuffer::new();
        out.push("type a int16");
        out.push_marked("int f(void);", Diagnostic::new(2, DiagnosticKind::Untranslated));
        assert_eq!(out.lines(), ["type a int16", "//!!! int f(void);"]);
        assert_eq!(out.diagnostics().len(), 1);
    }
}
