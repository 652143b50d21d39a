//! Native Passthrough Translation
//!
//! Lines that are already valid Go pass through unchanged:
//! - blank lines
//! - `//` comments (including ones rewritten from `/* */`)
//!
//! Every other line nothing else claimed is kept behind the diagnostic
//! marker, so the original C text survives as an inert comment.

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::lowering::OutputBuffer;

/// Emit a line that is already Go
pub fn process_native_line(line: &str, out: &mut OutputBuffer) {
    out.push(line);
}

/// Emit a line no translator understood
pub fn process_untranslated_line(raw: &str, line: usize, out: &mut OutputBuffer) {
    out.push_marked(raw, Diagnostic::new(line, DiagnosticKind::Untranslated));
}
