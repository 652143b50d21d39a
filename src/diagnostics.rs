//! Translation diagnostics
//!
//! Every output line carrying the [`COMMENT_LINE`](crate::helpers::COMMENT_LINE)
//! marker has a matching [`Diagnostic`] explaining why it was not translated.
//! Diagnostics never stop a translation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// C type found neither in the file's typedefs nor in the primitive table
    UnresolvedType(String),
    /// `#define` with a parameter list or a call in its value
    FunctionMacro,
    /// Bare enumerator whose value cannot be computed
    UnknownEnumValue,
    /// Line matched no construct
    Untranslated,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnresolvedType(ctype) => write!(f, "unresolved C type `{}`", ctype),
            DiagnosticKind::FunctionMacro => write!(f, "function-like macro"),
            DiagnosticKind::UnknownEnumValue => write!(f, "enumerator value cannot be computed"),
            DiagnosticKind::Untranslated => write!(f, "untranslated line"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based input line number
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Diagnostic { line, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(7, DiagnosticKind::UnresolvedType("struct foo".into()));
        assert_eq!(diag.to_string(), "line 7: unresolved C type `struct foo`");
    }
}
