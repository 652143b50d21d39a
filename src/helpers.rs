//! Helper utility functions for the header translator
//!
//! Contains general-purpose text utilities used throughout the translator:
//! - Inline comment stripping
//! - `/* ... */` to `//` comment rewriting
//! - Whitespace collapsing
//! - C identifier validation

/// Prefix put in front of every line that could not be translated.
///
/// It is a Go line comment, so a marked line is always inert.
pub const COMMENT_LINE: &str = "//!!! ";

/// Strip a trailing `//` comment from a line, preserving string literals
pub fn strip_inline_comment(line: &str) -> &str {
    match find_outside_literals(line, "//") {
        Some(pos) => line[..pos].trim_end(),
        None => line.trim_end(),
    }
}

/// Split a line into its code part and its trailing `//` comment (if any).
/// The comment keeps its `//` prefix.
pub fn split_inline_comment(line: &str) -> (&str, Option<&str>) {
    match find_outside_literals(line, "//") {
        Some(pos) => (line[..pos].trim_end(), Some(line[pos..].trim_end())),
        None => (line.trim_end(), None),
    }
}

/// Find `needle` in `line`, skipping over string and character literals
pub fn find_outside_literals(line: &str, needle: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }
        if b == b'"' || b == b'\'' {
            quote = Some(b);
            continue;
        }
        if line[i..].starts_with(needle) {
            return Some(i);
        }
    }
    None
}

/// Rewrite every `/* text */` comment that opens and closes on this line
/// into a trailing `// text` comment.
///
/// Returns `None` when the line holds no complete block comment.
/// ```text
/// #define MAX 10 /* limit */   ->  #define MAX 10 // limit
/// /* a */ int x;              ->  int x; // a
/// /* only a comment */        ->  // only a comment
/// ```
pub fn rewrite_block_comments(line: &str) -> Option<String> {
    let mut code = line.to_string();
    let mut texts: Vec<String> = Vec::new();

    while let Some(open) = find_outside_literals(&code, "/*") {
        let Some(close_rel) = code[open + 2..].find("*/") else {
            break;
        };
        let close = open + 2 + close_rel;
        let text = code[open + 2..close].trim().to_string();
        let before = code[..open].trim_end();
        let after = code[close + 2..].trim_start();

        code = match (before.is_empty(), after.is_empty()) {
            (true, _) => after.to_string(),
            (false, true) => before.to_string(),
            (false, false) => format!("{} {}", before, after),
        };
        if !text.is_empty() {
            texts.push(text);
        }
    }

    if texts.is_empty() && code == line {
        return None;
    }

    let comment = if texts.is_empty() {
        "//".to_string()
    } else {
        format!("// {}", texts.join(" "))
    };

    if code.is_empty() {
        Some(comment)
    } else {
        Some(format!("{} {}", code, comment))
    }
}

/// Split `code /* text` into the code and the text of the comment it opens.
///
/// Only meaningful after [`rewrite_block_comments`]: any `/*` left on the
/// line opens a comment that continues on the next lines.
pub fn split_open_comment(line: &str) -> Option<(&str, &str)> {
    let open = find_outside_literals(line, "/*")?;
    if open == 0 {
        return None;
    }
    Some((line[..open].trim_end(), line[open + 2..].trim()))
}

/// Go line comment holding `text`
pub fn go_comment(text: &str) -> String {
    if text.is_empty() {
        "//".to_string()
    } else {
        format!("// {}", text)
    }
}

/// Append an existing `//` comment to a rendered declaration
pub fn append_comment(code: String, comment: Option<&str>) -> String {
    match comment {
        Some(comment) => format!("{} {}", code, comment),
        None => code,
    }
}

/// Collapse runs of whitespace into single spaces: `unsigned   long` -> `unsigned long`
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check that `line` starts with `keyword` followed by a space or tab
pub fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .map(|rest| rest.starts_with(' ') || rest.starts_with('\t'))
        .unwrap_or(false)
}

/// Check if a string is a valid C identifier
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A line that is empty or already a Go comment passes through untouched
pub fn is_passthrough(line: &str) -> bool {
    line.is_empty() || line.starts_with("//")
}
