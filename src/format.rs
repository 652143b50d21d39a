//! Output formatting
//!
//! The translated buffer is handed to a [`Formatter`] before it is written.
//! A formatter either returns canonical Go text or reports a syntax error;
//! a syntax error means the translation is defective.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use clap::ValueEnum;

use crate::error::FormatError;
use crate::go_sanity::{check_go_output, format_sanity_errors};
use crate::helpers::strip_inline_comment;

pub trait Formatter: Send + Sync {
    /// Format `source`; `name` identifies the input in error messages
    fn format(&self, name: &str, source: &str) -> Result<String, FormatError>;
}

/// Which formatter the driver uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatterKind {
    /// Pipe through the `gofmt` binary
    #[default]
    Gofmt,
    /// Built-in syntax check and whitespace normalization
    Builtin,
}

impl FormatterKind {
    pub fn build(self) -> Box<dyn Formatter> {
        match self {
            FormatterKind::Gofmt => Box::new(Gofmt::from_env()),
            FormatterKind::Builtin => Box::new(SyntaxCheck),
        }
    }
}

//===========================================================================
// GOFMT
//===========================================================================

/// Runs `gofmt` as a filter (overridable with the `GOFMT` environment variable)
#[derive(Debug, Clone)]
pub struct Gofmt {
    program: String,
}

impl Gofmt {
    pub const ENV: &'static str = "GOFMT";

    pub fn from_env() -> Self {
        let program = env::var(Self::ENV).unwrap_or_else(|_| "gofmt".to_string());
        Gofmt { program }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Gofmt {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn spawn_error(&self, source: std::io::Error) -> FormatError {
        FormatError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Formatter for Gofmt {
    fn format(&self, name: &str, source: &str) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // gofmt reads all of its input before writing anything.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(source.as_bytes()) {
                // Reap the child before reporting; it may already have exited.
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(self.spawn_error(e));
            }
        }

        let output = child.wait_with_output().map_err(|e| self.spawn_error(e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FormatError::Syntax(
                stderr.trim().replace("<standard input>", name),
            ));
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}

//===========================================================================
// BUILT-IN
//===========================================================================

/// Structural check plus indentation of `( )` and `{ }` groups.
/// Column alignment is left to `gofmt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxCheck;

impl Formatter for SyntaxCheck {
    fn format(&self, name: &str, source: &str) -> Result<String, FormatError> {
        let result = check_go_output(source);
        if !result.is_valid {
            return Err(FormatError::Syntax(format_sanity_errors(name, &result)));
        }
        Ok(normalize(source))
    }
}

/// Indent group contents with tabs and collapse runs of blank lines
fn normalize(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut depth = 0usize;
    let mut blank_run = false;

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            // No blank line right after an opener or before a closer.
            if !blank_run && !out.ends_with("(\n") && !out.ends_with("{\n") {
                out.push('\n');
            }
            blank_run = true;
            continue;
        }
        blank_run = false;

        if line.starts_with(')') || line.starts_with('}') {
            if out.ends_with("\n\n") {
                out.pop();
            }
            depth = depth.saturating_sub(1);
        }
        for _ in 0..depth {
            out.push('\t');
        }
        out.push_str(line);
        out.push('\n');

        let code = strip_inline_comment(line);
        if code.ends_with('(') || code.ends_with('{') {
            depth += 1;
        }
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_indents_groups() {
        let source = "package p\n\n\nconst (\nA = 1\n\n)\n\ntype S struct {\nX int8 // x\n}\n\n";
        let formatted = SyntaxCheck.format("s.h", source).unwrap();
        assert_eq!(formatted, "package p\n\nconst (\n\tA = 1\n)\n\ntype S struct {\n\tX int8 // x\n}\n");
    }

    #[test]
    fn test_builtin_reports_syntax_error() {
        let err = SyntaxCheck.format("s.h", "package p\nconst (\n").unwrap_err();
        match err {
            FormatError::Syntax(message) => assert_eq!(message, "s.h:2:7: unclosed delimiter '('"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_marked_lines_are_inert() {
        let source = "package p\n//!!! #define SQUARE(x) ((x)*(x)\n";
        assert!(SyntaxCheck.format("s.h", source).is_ok());
    }

    #[test]
    fn test_missing_gofmt_is_spawn_error() {
        let gofmt = Gofmt::with_program("/nonexistent/gofmt-for-tests");
        let err = gofmt.format("s.h", "package p\n").unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
        assert!(err.to_string().starts_with("cannot run formatter `/nonexistent/gofmt-for-tests`"));
    }

    #[cfg(unix)]
    #[test]
    fn test_formatter_exiting_early_is_spawn_error() {
        // `true` never reads its input, so a large write hits a closed pipe.
        let gofmt = Gofmt::with_program("true");
        let source = "// filler line\n".repeat(1 << 16);
        let err = gofmt.format("big.h", &source).unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
    }
}
