//! Line classification for C headers
//!
//! [`classify`] matches one normalized line against the construct grammar
//! and returns the single best match with its captured fields. Detectors
//! are tried in a fixed order, each only in the modes that allow it:
//!
//! 1. comment continuation (only inside a multi-line comment)
//! 2. multi-line comment opening
//! 3. blank line closing a typedef or const block
//! 4. typedef line (top level only)
//! 5. `#define` line (top level only)
//! 6. enum body line (inside an enum) / enum opening (outside a struct)
//! 7. struct body line (inside a struct) / struct opening (outside an enum)
//! 8. fallback: blank and `//` lines pass through, anything else is untranslated
//!
//! Single-line `/* ... */` comments are rewritten to `//` comments before
//! classification (see [`rewrite_block_comments`](crate::helpers::rewrite_block_comments)),
//! so they reach this module either as pure `//` lines or as trailing comments.

use crate::helpers::{
    collapse_whitespace, find_outside_literals, is_c_identifier, is_passthrough,
    split_inline_comment, starts_with_keyword,
};
use crate::modes::Mode;

//===========================================================================
// MATCH TYPES
//===========================================================================

/// A line seen while inside a multi-line comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentLine<'a> {
    /// `/* text */`: opens and closes on this line
    Whole(&'a str),
    /// `text */ rest`: closes the comment
    Close { text: &'a str, rest: &'a str },
    /// `/* text`: another opening marker, accumulation continues
    Open(&'a str),
    /// Interior text, leading `*` decoration removed
    Inner(&'a str),
}

/// `<ctype> <declarator>;` as found in typedefs and struct fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// C type spelling with whitespace collapsed and pointer stars removed
    pub ctype: String,
    pub name: &'a str,
    pub pointers: usize,
    /// Array dimensions in source order, brackets included: `["[16]"]`
    pub dims: Vec<&'a str>,
    /// Text after the `;`
    pub trailing: &'a str,
}

/// What follows the `;` of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing<'a> {
    Nothing,
    Comment(&'a str),
    /// Anything else; the line holds more than one declaration
    Code,
}

impl<'a> Declaration<'a> {
    pub fn trailing_kind(&self) -> Trailing<'a> {
        if self.trailing.is_empty() {
            Trailing::Nothing
        } else if self.trailing.starts_with("//") {
            Trailing::Comment(self.trailing)
        } else {
            Trailing::Code
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enumerator<'a> {
    Explicit {
        name: &'a str,
        value: &'a str,
        comment: Option<&'a str>,
    },
    Bare {
        name: &'a str,
        comment: Option<&'a str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment(CommentLine<'a>),
    CommentOpen(&'a str),
    BlockEnd,
    Typedef(Declaration<'a>),
    Define(Define<'a>),
    EnumOpen(&'a str),
    Enumerator(Enumerator<'a>),
    /// `}` with whatever followed it
    EnumClose(&'a str),
    EnumUnknown,
    StructOpen(&'a str),
    StructField(Declaration<'a>),
    StructClose(&'a str),
    StructUnknown,
    Passthrough,
    Untranslated,
}

//===========================================================================
// CLASSIFIER
//===========================================================================

/// Classify one trimmed line given the current mode
pub fn classify<'a>(line: &'a str, mode: &Mode) -> LineKind<'a> {
    if mode.is_comment() {
        return LineKind::Comment(detect_comment_line(line));
    }

    if let Some(text) = line.strip_prefix("/*") {
        return LineKind::CommentOpen(text.trim());
    }

    if line.is_empty() && matches!(mode, Mode::TypeBlock | Mode::ConstBlock) {
        return LineKind::BlockEnd;
    }

    if mode.accepts_top_level() {
        if let Some(decl) = detect_typedef(line) {
            return LineKind::Typedef(decl);
        }
        if let Some(define) = detect_define(line) {
            return LineKind::Define(define);
        }
    }

    match mode {
        Mode::Enum => return classify_enum_body(line),
        Mode::Struct => return classify_struct_body(line),
        _ => {}
    }

    if let Some(tag) = detect_enum_open(line) {
        return LineKind::EnumOpen(tag);
    }
    if let Some(tag) = detect_struct_open(line) {
        return LineKind::StructOpen(tag);
    }

    if is_passthrough(line) {
        LineKind::Passthrough
    } else {
        LineKind::Untranslated
    }
}

fn classify_enum_body(line: &str) -> LineKind<'_> {
    if is_passthrough(line) {
        return LineKind::Passthrough;
    }
    if let Some(rest) = line.strip_prefix('}') {
        return LineKind::EnumClose(rest.trim());
    }
    match detect_enumerator(line) {
        Some(enumerator) => LineKind::Enumerator(enumerator),
        None => LineKind::EnumUnknown,
    }
}

fn classify_struct_body(line: &str) -> LineKind<'_> {
    if is_passthrough(line) {
        return LineKind::Passthrough;
    }
    if let Some(rest) = line.strip_prefix('}') {
        return LineKind::StructClose(rest.trim());
    }
    match detect_field(line) {
        Some(decl) => LineKind::StructField(decl),
        None => LineKind::StructUnknown,
    }
}

//===========================================================================
// DETECTORS
//===========================================================================

/// Split a comment line seen inside a multi-line comment
pub fn detect_comment_line(line: &str) -> CommentLine<'_> {
    if let Some(open) = line.find("/*") {
        if let Some(close_rel) = line[open + 2..].find("*/") {
            return CommentLine::Whole(line[open + 2..open + 2 + close_rel].trim());
        }
    }
    if let Some(close) = line.find("*/") {
        return CommentLine::Close {
            text: strip_decoration(&line[..close]),
            rest: line[close + 2..].trim(),
        };
    }
    if let Some(text) = line.strip_prefix("/*") {
        return CommentLine::Open(text.trim());
    }
    CommentLine::Inner(strip_decoration(line))
}

/// Drop the ` * ` column decoration of a comment interior line
fn strip_decoration(text: &str) -> &str {
    text.trim_start_matches(|c: char| c == '*' || c.is_whitespace())
        .trim_end()
}

/// `typedef <ctype> <name>;`
pub fn detect_typedef(line: &str) -> Option<Declaration<'_>> {
    if !starts_with_keyword(line, "typedef") {
        return None;
    }
    detect_field(line["typedef".len()..].trim_start())
}

/// `<ctype> <declarator>; trailing`
pub fn detect_field(line: &str) -> Option<Declaration<'_>> {
    let semi = find_outside_literals(line, ";")?;
    let head = line[..semi].trim();
    let trailing = line[semi + 1..].trim();

    let split = head.rfind(char::is_whitespace)?;
    let raw_type = head[..split].trim_end();
    let declarator = head[split..].trim_start();

    let type_part = raw_type.trim_end_matches(['*', ' ', '\t']);
    let stars_in_type = raw_type[type_part.len()..].matches('*').count();

    let bare = declarator.trim_start_matches('*');
    let pointers = stars_in_type + (declarator.len() - bare.len());

    let (name, dims) = split_dimensions(bare)?;
    if type_part.is_empty() || type_part.contains([',', '(', ')']) || !is_c_identifier(name) {
        return None;
    }

    Some(Declaration {
        ctype: collapse_whitespace(type_part),
        name,
        pointers,
        dims,
        trailing,
    })
}

/// `name[2][3]` -> (`name`, [`[2]`, `[3]`])
fn split_dimensions(declarator: &str) -> Option<(&str, Vec<&str>)> {
    let Some(open) = declarator.find('[') else {
        return Some((declarator, Vec::new()));
    };
    let name = &declarator[..open];
    let mut rest = &declarator[open..];
    let mut dims = Vec::new();

    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return None;
        }
        let close = rest.find(']')?;
        dims.push(&rest[..=close]);
        rest = &rest[close + 1..];
    }
    Some((name, dims))
}

/// `#define NAME value` (also `# define` and `#DEFINE`)
pub fn detect_define(line: &str) -> Option<Define<'_>> {
    let rest = line.strip_prefix('#')?.trim_start();
    let rest = rest
        .strip_prefix("define")
        .or_else(|| rest.strip_prefix("DEFINE"))?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let rest = rest.trim_start();

    // A parameter list belongs to the name even when it holds spaces.
    let mut name_end = rest.find(char::is_whitespace)?;
    if let Some(paren) = rest[..name_end].find('(') {
        if !rest[..name_end].contains(')') {
            name_end = paren + rest[paren..].find(')')? + 1;
        }
    }

    let name = &rest[..name_end];
    let value = rest[name_end..].trim();
    if value.is_empty() {
        return None;
    }
    Some(Define { name, value })
}

/// `enum <tag> {`; the tag may be empty for an anonymous enum
pub fn detect_enum_open(line: &str) -> Option<&str> {
    let tag = detect_block_open(line, "enum")?;
    if tag.is_empty() || is_c_identifier(tag) {
        Some(tag)
    } else {
        None
    }
}

/// `struct <tag> {`
pub fn detect_struct_open(line: &str) -> Option<&str> {
    let tag = detect_block_open(line, "struct")?;
    if is_c_identifier(tag) {
        Some(tag)
    } else {
        None
    }
}

fn detect_block_open<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if !(rest.starts_with([' ', '\t', '{'])) {
        return None;
    }
    let (code, _) = split_inline_comment(rest);
    let tag = code.strip_suffix('{')?;
    Some(tag.trim())
}

/// `NAME = value,` or `NAME,` with an optional trailing `//` comment
pub fn detect_enumerator(line: &str) -> Option<Enumerator<'_>> {
    let (code, comment) = split_inline_comment(line);

    if let Some(eq) = code.find('=') {
        let name = code[..eq].trim();
        let after = &code[eq + 1..];
        let (value, rest) = match find_top_level_comma(after) {
            Some(comma) => (after[..comma].trim(), after[comma + 1..].trim()),
            None => (after.trim(), ""),
        };
        if !is_c_identifier(name) || value.is_empty() || !rest.is_empty() {
            return None;
        }
        return Some(Enumerator::Explicit { name, value, comment });
    }

    let name = code.strip_suffix(',').unwrap_or(code).trim();
    if is_c_identifier(name) {
        Some(Enumerator::Bare { name, comment })
    } else {
        None
    }
}

fn find_top_level_comma(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
