//! Typedef Translation
//!
//! ```text
//! typedef unsigned long ulong_t;      type ulong_t uint32
//!
//! typedef int pid_t;                  type (
//! typedef char *caddr_t;         ->       pid_t   int16
//!                                         caddr_t *int8
//!                                     )
//! ```
//!
//! A run of consecutive typedefs becomes one `type ( ... )` group. Whether
//! a typedef starts a run is decided by the caller peeking at the next line.

use tracing::debug;

use crate::detection::{Declaration, Trailing};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::helpers::append_comment;
use crate::lowering::{OutputBuffer, TranslationState};
use crate::modes::{BlockKind, Mode};
use crate::translate::group_translate::close_open_group;
use crate::type_map::resolve_declarator;

/// Result of processing a typedef line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedefResult {
    /// `type name T` on one line
    Single,
    /// First typedef of a `type (` group
    BlockOpened,
    /// Added to an open group
    InBlock,
    /// Emitted diagnostic-marked
    Marked,
}

/// Translate one typedef.
///
/// `opens_run` tells whether the next line is another typedef; it is only
/// consulted when no typedef group is open yet.
pub fn process_typedef_line(
    decl: &Declaration<'_>,
    raw: &str,
    line: usize,
    opens_run: bool,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> TypedefResult {
    // The new name is visible to its own underlying type.
    state.registry.register(decl.name);

    let comment = match decl.trailing_kind() {
        Trailing::Nothing => None,
        Trailing::Comment(comment) => Some(comment),
        Trailing::Code => {
            out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::Untranslated));
            return TypedefResult::Marked;
        }
    };

    let resolved = resolve_declarator(&decl.ctype, decl.pointers, &decl.dims, &state.registry);
    let body = append_comment(format!("{} {}", decl.name, resolved.go_type), comment);

    let (text, result) = if state.mode == Mode::TypeBlock {
        (body, TypedefResult::InBlock)
    } else {
        close_open_group(state, out);
        if opens_run {
            out.push("type (");
            state.open_block(BlockKind::TypeBlock, line);
            debug!(line, "typedef block opened");
            (body, TypedefResult::BlockOpened)
        } else {
            (format!("type {}", body), TypedefResult::Single)
        }
    };

    if resolved.matched {
        out.push(text);
        result
    } else {
        let kind = DiagnosticKind::UnresolvedType(decl.ctype.clone());
        out.push_marked(&text, Diagnostic::new(line, kind));
        if result == TypedefResult::BlockOpened {
            result
        } else {
            TypedefResult::Marked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::detect_typedef;

    fn run(line: &str, opens_run: bool, state: &mut TranslationState, out: &mut OutputBuffer) -> TypedefResult {
        let decl = detect_typedef(line).unwrap();
        process_typedef_line(&decl, line, 1, opens_run, state, out)
    }

    #[test]
    fn test_single_typedef() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        let result = run("typedef unsigned long ulong_t;", false, &mut state, &mut out);
        assert_eq!(result, TypedefResult::Single);
        assert_eq!(out.lines(), ["type ulong_t uint32"]);
        assert!(state.registry.contains("ulong_t"));
        assert_eq!(state.mode, Mode::None);
    }

    #[test]
    fn test_run_of_typedefs() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        assert_eq!(run("typedef int pid_t;", true, &mut state, &mut out), TypedefResult::BlockOpened);
        assert_eq!(run("typedef pid_t id_t; // process", false, &mut state, &mut out), TypedefResult::InBlock);
        assert_eq!(out.lines(), ["type (", "pid_t int16", "id_t pid_t // process"]);
        assert_eq!(state.mode, Mode::TypeBlock);
    }

    #[test]
    fn test_closes_const_block() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        state.open_block(BlockKind::ConstBlock, 1);
        run("typedef char *caddr_t;", false, &mut state, &mut out);
        assert_eq!(out.lines(), [")", "", "type caddr_t *int8"]);
    }

    #[test]
    fn test_unresolved_type_is_marked() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        let result = run("typedef struct foo foo_t;", false, &mut state, &mut out);
        assert_eq!(result, TypedefResult::Marked);
        assert_eq!(out.lines(), ["//!!! type foo_t struct foo"]);
        assert_eq!(
            out.diagnostics()[0].kind,
            DiagnosticKind::UnresolvedType("struct foo".to_string())
        );
        assert!(state.registry.contains("foo_t"));
    }

    #[test]
    fn test_second_declaration_on_line_is_marked() {
        let mut state = TranslationState::default();
        let mut out = OutputBuffer::new();
        run("typedef int a; int b;", false, &mut state, &mut out);
        assert_eq!(out.lines(), ["//!!! typedef int a; int b;"]);
    }
}
