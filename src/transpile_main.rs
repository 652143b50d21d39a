//! Main Translation Loop
//!
//! Orchestrates the line-by-line translation of a C header to Go.
//! Each line is normalized, classified against the current mode and handed
//! to the matching translator. Typedef and define lines may peek at the
//! next line; the peeked line is processed on the following iteration.

use std::io::{self, BufRead};

use tracing::debug;

use crate::config::TranslateOptions;
use crate::detection::{classify, LineKind};
use crate::diagnostics::Diagnostic;
use crate::error::TranslateError;
use crate::helpers::{rewrite_block_comments, split_open_comment};
use crate::lowering::{check_next_is_define, check_next_is_typedef, LineSource, OutputBuffer, TranslationState};
use crate::modes::Mode;
use crate::translate::{
    close_open_group, process_comment_line, process_comment_open, process_define_line,
    process_enum_close, process_enum_open, process_enum_unknown, process_enumerator,
    process_native_line, process_struct_close, process_struct_field, process_struct_open,
    process_struct_unknown, process_typedef_line, process_untranslated_line,
};

/// Result of translating one header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Preamble followed by the translated body, unformatted
    pub source: String,
    /// One entry per diagnostic-marked line, in input order
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate a C header read line by line from `reader`
pub fn translate<R: BufRead>(reader: R, options: &TranslateOptions) -> Result<Translation, TranslateError> {
    let mut source = LineSource::new(reader);
    let mut state = TranslationState::new(options.first_enumerator);
    let mut out = OutputBuffer::new();

    while let Some(raw) = source.next_line()? {
        let number = source.line_number();
        process_line(&raw, number, &mut source, &mut state, &mut out)?;
    }

    finish(state, out, options)
}

/// Translate a header held in memory
pub fn translate_str(header: &str, options: &TranslateOptions) -> Result<Translation, TranslateError> {
    translate(header.as_bytes(), options)
}

fn process_line<R: BufRead>(
    raw: &str,
    number: usize,
    source: &mut LineSource<R>,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> io::Result<()> {
    if state.mode.is_comment() {
        return dispatch(raw, raw, number, source, state, out);
    }

    let rewritten = rewrite_block_comments(raw);
    let line = rewritten.as_deref().unwrap_or(raw);

    // `int x; /* starts here`: the code first, then the comment it opens.
    if let Some((code, text)) = split_open_comment(line) {
        dispatch(code, code, number, source, state, out)?;
        process_comment_open(text, number, state, out);
        return Ok(());
    }

    dispatch(line, raw, number, source, state, out)
}

/// Route one normalized line to its translator.
///
/// `raw` is the line before comment rewriting; marked lines keep it verbatim.
fn dispatch<R: BufRead>(
    line: &str,
    raw: &str,
    number: usize,
    source: &mut LineSource<R>,
    state: &mut TranslationState,
    out: &mut OutputBuffer,
) -> io::Result<()> {
    match classify(line, &state.mode) {
        LineKind::Comment(comment) => {
            process_comment_line(&comment, number, state, out);
        }
        LineKind::CommentOpen(text) => {
            process_comment_open(text, number, state, out);
        }
        LineKind::BlockEnd => {
            close_open_group(state, out);
        }
        LineKind::Typedef(decl) => {
            let opens_run =
                state.mode != Mode::TypeBlock && check_next_is_typedef(source.peek_line()?);
            process_typedef_line(&decl, raw, number, opens_run, state, out);
        }
        LineKind::Define(define) => {
            let opens_run =
                state.mode != Mode::ConstBlock && check_next_is_define(source.peek_line()?);
            process_define_line(&define, raw, number, opens_run, state, out);
        }
        LineKind::EnumOpen(tag) => {
            process_enum_open(tag, number, state, out);
        }
        LineKind::Enumerator(enumerator) => {
            process_enumerator(&enumerator, raw, number, state, out);
        }
        LineKind::EnumClose(rest) => {
            process_enum_close(rest, raw, number, state, out);
        }
        LineKind::EnumUnknown => {
            process_enum_unknown(raw, number, out);
        }
        LineKind::StructOpen(tag) => {
            process_struct_open(tag, number, state, out);
        }
        LineKind::StructField(decl) => {
            process_struct_field(&decl, raw, number, state, out);
        }
        LineKind::StructClose(rest) => {
            process_struct_close(rest, raw, number, state, out);
        }
        LineKind::StructUnknown => {
            process_struct_unknown(raw, number, out);
        }
        LineKind::Passthrough => {
            process_native_line(line, out);
        }
        LineKind::Untranslated => {
            process_untranslated_line(raw, number, out);
        }
    }
    Ok(())
}

/// End of input: close an open typedef/const group, reject anything else
fn finish(
    mut state: TranslationState,
    mut out: OutputBuffer,
    options: &TranslateOptions,
) -> Result<Translation, TranslateError> {
    if let Some((construct, line)) = state.unclosed() {
        return Err(TranslateError::UnbalancedBlock { construct, line });
    }
    close_open_group(&mut state, &mut out);

    let (lines, diagnostics) = out.into_parts();
    debug!(
        lines = lines.len(),
        types = state.registry.len(),
        diagnostics = diagnostics.len(),
        "translation finished"
    );

    let mut source = options.preamble();
    for line in lines {
        source.push_str(&line);
        source.push('\n');
    }
    Ok(Translation { source, diagnostics })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(header: &str) -> String {
        let options = TranslateOptions::new("p");
        let translation = translate_str(header, &options).unwrap();
        translation.source[options.preamble().len()..].to_string()
    }

    #[test]
    fn test_preamble_only_for_empty_input() {
        let options = TranslateOptions::new("syscall");
        let translation = translate_str("", &options).unwrap();
        assert_eq!(translation.source, options.preamble());
        assert!(translation.diagnostics.is_empty());
    }

    #[test]
    fn test_group_closed_at_end_of_input() {
        assert_eq!(body("#define A 1\n#define B 2\n"), "const (\nA = 1\nB = 2\n)\n\n");
    }

    #[test]
    fn test_comment_after_code_opens_comment() {
        assert_eq!(
            body("#define A 1 /* first\n   continued */\n"),
            "const A = 1\n// first\n// continued\n"
        );
    }

    #[test]
    fn test_single_line_block_comment_is_kept() {
        assert_eq!(body("#define A 1 /* one */\n"), "const A = 1 // one\n");
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(body("typedef int a;\r\n"), "type a int16\n");
    }
}
