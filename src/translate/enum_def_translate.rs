//! Enum Definition Translation
//!
//! C enum bodies become groups of Go constants inside a `const ( ... )`
//! block, introduced by a comment naming the enum. Tag and enumerator
//! names are capitalized so the constants are exported:
//!
//! ```text
//! enum color {                 const (
//!     RED = 5,                 // enum Color
//!     GREEN,             ->    RED = 5
//!     BLUE                     GREEN = 6
//! };                           BLUE = 7
//! ```
//!
//! The surrounding const block stays open after the body closes so that
//! following defines or enums join it.

use tracing::debug;

use crate::detection::Enumerator;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::enum_def::go_int_literal;
use crate::helpers::append_comment;
use crate::identifier::capitalize;
use crate::lowering::{OutputBuffer, TranslationState};
use crate::modes::{BlockKind, Mode};
use crate::translate::group_translate::close_open_group;

/// Result of processing an enum definition line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumDefResult {
    /// Started enum body
    Started,
    /// `NAME = value` as written
    Explicit,
    /// Bare enumerator given the successor of the previous value
    Implicit(i64),
    /// Closing the enum body
    Closed,
    /// Emitted diagnostic-marked
    Marked,
}

/// `enum <tag> {`
pub fn process_enum_open(
    tag: &str,
    line: usize,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> EnumDefResult {
    if state.mode != Mode::ConstBlock {
        close_open_group(state, out);
        out.push("const (");
    }
    state.open_block(BlockKind::Enum, line);
    debug!(line, tag, "enum body opened");

    if tag.is_empty() {
        out.push("// enum");
    } else {
        out.push(format!("// enum {}", capitalize(tag)));
    }
    EnumDefResult::Started
}

/// One enumerator line inside an enum body
pub fn process_enumerator(
    enumerator: &Enumerator<'_>,
    raw: &str,
    line: usize,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> EnumDefResult {
    match *enumerator {
        Enumerator::Explicit { name, value, comment } => {
            state.enum_values.record_explicit(value);
            let value = go_int_literal(value).unwrap_or_else(|| value.to_string());
            out.push(append_comment(format!("{} = {}", capitalize(name), value), comment));
            EnumDefResult::Explicit
        }
        Enumerator::Bare { name, comment } => match state.enum_values.advance() {
            Some(value) => {
                out.push(append_comment(format!("{} = {}", capitalize(name), value), comment));
                EnumDefResult::Implicit(value)
            }
            None => {
                out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::UnknownEnumValue));
                EnumDefResult::Marked
            }
        },
    }
}

/// `}` ending the enum body.
///
/// A declarator after the brace (`} color_t;`) is not translated and is
/// kept as a marked line.
pub fn process_enum_close(
    rest: &str,
    raw: &str,
    line: usize,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> EnumDefResult {
    let rest = rest.trim_start_matches(';').trim_start();
    if rest.starts_with("//") {
        out.push(rest);
    } else if !rest.is_empty() {
        out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::Untranslated));
    }
    out.push("");
    state.close_enum();
    debug!(line, opened_at = state.block_opened_at, "enum body closed");
    EnumDefResult::Closed
}

/// Unrecognized line inside an enum body
pub fn process_enum_unknown(raw: &str, line: usize, out: &mut OutputBuffer) -> EnumDefResult {
    out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::Untranslated));
    EnumDefResult::Marked
}
