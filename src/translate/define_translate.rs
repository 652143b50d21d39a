//! Define Translation
//!
//! Object-like macros become Go constants:
//! ```text
//! #define MAX_LEN 256          const MAX_LEN = 256
//!
//! #define O_RDONLY 0           const (
//! #define O_WRONLY 1      ->       O_RDONLY = 0
//!                                  O_WRONLY = 1
//!                              )
//! ```
//!
//! Function-like macros have no Go counterpart and are kept as marked lines.

use tracing::debug;

use crate::detection::Define;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::enum_def::go_int_literal;
use crate::helpers::{append_comment, split_inline_comment, strip_inline_comment};
use crate::lowering::{OutputBuffer, TranslationState};
use crate::modes::{BlockKind, Mode};
use crate::translate::group_translate::close_open_group;

/// Result of processing a define line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineResult {
    /// `const NAME = value` on one line
    Single,
    /// First constant of a `const (` group
    BlockOpened,
    /// Added to an open group
    InBlock,
    /// Function-like macro, emitted diagnostic-marked
    FunctionMacro,
}

/// A parameter list on the name, or any parenthesized group in the value.
///
/// Parenthesized values are rejected even when they are plain arithmetic:
/// a C cast such as `((int)3)` is not a Go expression.
pub fn is_function_macro(define: &Define<'_>) -> bool {
    define.name.contains('(') || strip_inline_comment(define.value).contains('(')
}

/// Translate one `#define`.
///
/// `opens_run` tells whether the next line is another define; it is only
/// consulted when no const group is open yet.
pub fn process_define_line(
    define: &Define<'_>,
    raw: &str,
    line: usize,
    opens_run: bool,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> DefineResult {
    if is_function_macro(define) {
        out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::FunctionMacro));
        return DefineResult::FunctionMacro;
    }

    let (value, comment) = split_inline_comment(define.value);
    let value = go_int_literal(value).unwrap_or_else(|| value.to_string());
    let body = append_comment(format!("{} = {}", define.name, value), comment);

    if state.mode == Mode::ConstBlock {
        out.push(body);
        return DefineResult::InBlock;
    }

    close_open_group(state, out);
    if opens_run {
        out.push("const (");
        state.open_block(BlockKind::ConstBlock, line);
        debug!(line, "const block opened");
        out.push(body);
        DefineResult::BlockOpened
    } else {
        out.push(format!("const {}", body));
        DefineResult::Single
    }
}
