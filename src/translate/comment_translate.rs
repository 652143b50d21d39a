//! Comment Translation
//!
//! Turns C block comments into Go line comments. Single-line `/* */`
//! comments are rewritten before classification, so only multi-line
//! comments reach this module.
//!
//! ```text
//! /* Socket options.           // Socket options.
//!  * See setsockopt(2).    ->  // See setsockopt(2).
//!  */
//! ```

use tracing::debug;

use crate::detection::CommentLine;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::helpers::go_comment;
use crate::lowering::{OutputBuffer, TranslationState};

/// Result of processing a line inside a multi-line comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentResult {
    /// Comment opened on this line
    Opened,
    /// Interior text
    Text,
    /// Comment closed on this line
    Closed,
}

/// `/* text` with no closing marker: enter comment mode
pub fn process_comment_open(
    text: &str,
    line: usize,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> CommentResult {
    state.enter_comment(line);
    debug!(line, "comment opened");
    let text = text.trim_start_matches('*').trim();
    if !text.is_empty() {
        out.push(go_comment(text));
    }
    CommentResult::Opened
}

/// A line seen while a multi-line comment is open
pub fn process_comment_line(
    comment: &CommentLine<'_>,
    line: usize,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> CommentResult {
    match *comment {
        // C comments do not nest: the `*/` ends the open comment.
        CommentLine::Whole(text) => {
            out.push(go_comment(text));
            state.exit_comment();
            CommentResult::Closed
        }
        CommentLine::Close { text, rest } => {
            if !text.is_empty() {
                out.push(go_comment(text));
            }
            state.exit_comment();
            if !rest.is_empty() {
                out.push_marked(rest, Diagnostic::new(line, DiagnosticKind::Untranslated));
            }
            CommentResult::Closed
        }
        CommentLine::Open(text) => {
            if !text.is_empty() {
                out.push(go_comment(text));
            }
            CommentResult::Text
        }
        CommentLine::Inner(text) => {
            out.push(go_comment(text));
            CommentResult::Text
        }
    }
}
