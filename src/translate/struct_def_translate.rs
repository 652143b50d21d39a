//! Struct Definition Translation
//!
//! Translates C struct definitions to Go struct types.
//!
//! C struct syntax:
//! ```text
//! struct stat {
//!     unsigned long st_size;
//!     char *st_name;
//!     int st_spare[4];
//! };
//! ```
//!
//! Go struct syntax (fields exported, tag prefix dropped):
//! ```text
//! type Stat struct {
//!     Size uint32
//!     Name *int8
//!     Spare [4]int16
//! }
//! ```

use tracing::debug;

use crate::detection::{Declaration, Trailing};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::helpers::append_comment;
use crate::identifier::{capitalize, export_name};
use crate::lowering::{OutputBuffer, TranslationState};
use crate::modes::BlockKind;
use crate::translate::group_translate::close_open_group;
use crate::type_map::resolve_declarator;

/// Result of processing a struct definition line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructDefResult {
    /// Started struct definition
    Started,
    /// Field inside struct definition
    Field,
    /// Closing struct definition
    Closed,
    /// Emitted diagnostic-marked
    Marked,
}

/// `struct <tag> {`
pub fn process_struct_open(
    tag: &str,
    line: usize,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> StructDefResult {
    // Structs and const/type groups cannot interleave.
    close_open_group(state, out);
    state.open_block(BlockKind::Struct, line);
    debug!(line, tag, "struct body opened");
    out.push(format!("type {} struct {{", capitalize(tag)));
    StructDefResult::Started
}

/// `<ctype> <name>;` inside a struct body
pub fn process_struct_field(
    decl: &Declaration<'_>,
    raw: &str,
    line: usize,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> StructDefResult {
    let comment = match decl.trailing_kind() {
        Trailing::Nothing => None,
        Trailing::Comment(comment) => Some(comment),
        Trailing::Code => {
            out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::Untranslated));
            return StructDefResult::Marked;
        }
    };

    let resolved = resolve_declarator(&decl.ctype, decl.pointers, &decl.dims, &state.registry);
    let text = append_comment(
        format!("{} {}", export_name(decl.name), resolved.go_type),
        comment,
    );

    if resolved.matched {
        out.push(text);
        StructDefResult::Field
    } else {
        let kind = DiagnosticKind::UnresolvedType(decl.ctype.clone());
        out.push_marked(&text, Diagnostic::new(line, kind));
        StructDefResult::Marked
    }
}

/// `}` ending the struct body; the C statement terminator is dropped
pub fn process_struct_close(
    rest: &str,
    raw: &str,
    line: usize,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> StructDefResult {
    let rest = rest.trim_start_matches(';').trim_start();
    if rest.is_empty() {
        out.push("}");
    } else if rest.starts_with("//") {
        out.push(format!("}} {}", rest));
    } else {
        out.push("}");
        out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::Untranslated));
    }
    out.push("");
    state.close_block();
    debug!(line, opened_at = state.block_opened_at, "struct body closed");
    StructDefResult::Closed
}

/// Unrecognized line inside a struct body
pub fn process_struct_unknown(raw: &str, line: usize, out: &mut OutputBuffer) -> StructDefResult {
    out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::Untranslated));
    StructDefResult::Marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::detect_field;
    use crate::modes::Mode;

    fn field(line: &str, state: &mut TranslationState, out: &mut OutputBuffer) -> StructDefResult {
        let decl = detect_field(line).unwrap();
        process_struct_field(&decl, line, 2, state, out)
    }

    #[test]
    fn test_struct_def() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        assert_eq!(process_struct_open("stat", 1, &mut state, &mut out), StructDefResult::Started);
        assert_eq!(state.mode, Mode::Struct);
        field("unsigned long st_size;", &mut state, &mut out);
        field("char *st_name; // path", &mut state, &mut out);
        field("int st_spare[4];", &mut state, &mut out);
        assert_eq!(process_struct_close(";", "};", 5, &mut state, &mut out), StructDefResult::Closed);
        assert_eq!(
            out.lines(),
            [
                "type Stat struct {",
                "Size uint32",
                "Name *int8 // path",
                "Spare [4]int16",
                "}",
                "",
            ]
        );
        assert_eq!(state.mode, Mode::None);
    }

    #[test]
    fn test_closes_const_block() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        state.open_block(BlockKind::ConstBlock, 1);
        process_struct_open("Point", 3, &mut state, &mut out);
        assert_eq!(out.lines(), [")", "", "type Point struct {"]);
    }

    #[test]
    fn test_unresolved_field_is_marked() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        state.open_block(BlockKind::Struct, 1);
        assert_eq!(field("struct timeval tv;", &mut state, &mut out), StructDefResult::Marked);
        assert_eq!(out.lines(), ["//!!! Tv struct timeval"]);
        assert_eq!(out.diagnostics()[0].line, 2);
    }

    #[test]
    fn test_close_keeps_comment() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        state.open_block(BlockKind::Struct, 1);
        process_struct_close("; // stat", "}; // stat", 4, &mut state, &mut out);
        assert_eq!(out.lines(), ["} // stat", ""]);
    }

    #[test]
    fn test_close_with_declarator() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        state.open_block(BlockKind::Struct, 1);
        process_struct_close("point_t;", "} point_t;", 4, &mut state, &mut out);
        assert_eq!(out.lines(), ["}", "//!!! } point_t;", ""]);
    }
}
