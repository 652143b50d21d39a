//! Go Sanity Check Module
//!
//! Validates that a translated buffer is syntactically plausible Go before
//! it is written out. Used by the built-in formatter when `gofmt` is not
//! available, so a broken translation is still reported instead of written.
//!
//! Checks performed:
//! - A `package` clause before any declaration
//! - Balanced delimiters: (), [], {} outside comments, strings and runes
//! - No unclosed interpreted strings or rune literals

/// Result of sanity check
#[derive(Debug, Clone)]
pub struct SanityCheckResult {
    pub is_valid: bool,
    pub errors: Vec<SanityError>,
}

#[derive(Debug, Clone)]
pub struct SanityError {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub kind: SanityErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SanityErrorKind {
    MissingPackage,
    UnbalancedDelimiter,
    UnclosedString,
}

impl SanityCheckResult {
    pub fn ok() -> Self {
        SanityCheckResult {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn error(errors: Vec<SanityError>) -> Self {
        SanityCheckResult {
            is_valid: false,
            errors,
        }
    }
}

/// Perform all sanity checks on translated Go source
pub fn check_go_output(go_code: &str) -> SanityCheckResult {
    let mut errors = Vec::new();

    if let Some(err) = check_package_clause(go_code) {
        errors.push(err);
    }
    if let Some(err) = check_balanced_delimiters(go_code) {
        errors.push(err);
    }
    errors.extend(check_unclosed_strings(go_code));

    if errors.is_empty() {
        SanityCheckResult::ok()
    } else {
        SanityCheckResult::error(errors)
    }
}

/// The first line that is neither blank nor a comment must be the package clause
fn check_package_clause(code: &str) -> Option<SanityError> {
    for (line_num, line) in code.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        if trimmed.starts_with("package ") {
            return None;
        }
        return Some(SanityError {
            line: line_num + 1,
            column: 1,
            message: "expected 'package' clause".to_string(),
            kind: SanityErrorKind::MissingPackage,
        });
    }
    Some(SanityError {
        line: 1,
        column: 1,
        message: "expected 'package' clause, found end of file".to_string(),
        kind: SanityErrorKind::MissingPackage,
    })
}

/// Check for balanced delimiters: (), [], {}
fn check_balanced_delimiters(code: &str) -> Option<SanityError> {
    let mut stack: Vec<(char, usize, usize)> = Vec::new();

    for (line_num, line) in code.lines().enumerate() {
        for (col, ch) in code_chars(line) {
            let expected = match ch {
                '(' | '[' | '{' => {
                    stack.push((ch, line_num + 1, col + 1));
                    continue;
                }
                ')' => '(',
                ']' => '[',
                '}' => '{',
                _ => continue,
            };
            match stack.pop() {
                Some((open, _, _)) if open == expected => {}
                Some((open, _, _)) => {
                    return Some(SanityError {
                        line: line_num + 1,
                        column: col + 1,
                        message: format!("mismatched delimiter: expected closing for '{}', found '{}'", open, ch),
                        kind: SanityErrorKind::UnbalancedDelimiter,
                    });
                }
                None => {
                    return Some(SanityError {
                        line: line_num + 1,
                        column: col + 1,
                        message: format!("unexpected closing '{}'", ch),
                        kind: SanityErrorKind::UnbalancedDelimiter,
                    });
                }
            }
        }
    }

    stack.pop().map(|(ch, line, column)| SanityError {
        line,
        column,
        message: format!("unclosed delimiter '{}'", ch),
        kind: SanityErrorKind::UnbalancedDelimiter,
    })
}

/// Characters of `line` that are code: comments and literal contents skipped
fn code_chars(line: &str) -> Vec<(usize, char)> {
    let mut result = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut chars = line.char_indices().peekable();

    while let Some((col, ch)) = chars.next() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' && q != '`' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
            '/' if matches!(chars.peek(), Some((_, '/'))) => break,
            _ => result.push((col, ch)),
        }
    }
    result
}

/// Interpreted strings and runes must close on the line they open
fn check_unclosed_strings(code: &str) -> Vec<SanityError> {
    let mut errors = Vec::new();

    for (line_num, line) in code.lines().enumerate() {
        let mut open: Option<(char, usize)> = None;
        let mut escaped = false;
        let mut prev = None;

        for (col, ch) in line.char_indices() {
            match open {
                Some((q, _)) => {
                    if escaped {
                        escaped = false;
                    } else if ch == '\\' {
                        escaped = true;
                    } else if ch == q {
                        open = None;
                    }
                }
                None => {
                    if ch == '/' && prev == Some('/') {
                        break;
                    }
                    if ch == '"' || ch == '\'' {
                        open = Some((ch, col));
                    }
                }
            }
            prev = Some(ch);
        }

        if let Some((q, col)) = open {
            errors.push(SanityError {
                line: line_num + 1,
                column: col + 1,
                message: format!("literal not terminated: {}", if q == '"' { "string" } else { "rune" }),
                kind: SanityErrorKind::UnclosedString,
            });
        }
    }

    errors
}

/// Render errors the way `gofmt` reports them: `name:line:col: message`
pub fn format_sanity_errors(name: &str, result: &SanityCheckResult) -> String {
    result
        .errors
        .iter()
        .map(|err| format!("{}:{}:{}: {}", name, err.line, err.column, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_translation() {
        let code = "// goheader\npackage p\n\nconst (\nA = 1 // (unbalanced in comment\n)\n\ntype S struct {\nX [4]int8\n}\n";
        let result = check_go_output(code);
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn test_unbalanced_group() {
        let result = check_go_output("package p\nconst (\nA = 1\n");
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].kind, SanityErrorKind::UnbalancedDelimiter);
        assert_eq!(result.errors[0].line, 2);
    }

    #[test]
    fn test_mismatched_delimiter() {
        let result = check_go_output("package p\ntype S struct {\n)\n");
        assert_eq!(result.errors[0].message, "mismatched delimiter: expected closing for '{', found ')'");
    }

    #[test]
    fn test_delimiters_in_literals_ignored() {
        let result = check_go_output("package p\nconst A = \"(\"\nconst B = ')'\nconst C = `[`\n");
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn test_missing_package() {
        let result = check_go_output("// header\nconst A = 1\n");
        assert_eq!(result.errors[0].kind, SanityErrorKind::MissingPackage);
        assert_eq!(result.errors[0].line, 2);
    }

    #[test]
    fn test_unclosed_string() {
        let result = check_go_output("package p\nconst A = \"abc\n");
        assert!(result.errors.iter().any(|e| e.kind == SanityErrorKind::UnclosedString));
    }

    #[test]
    fn test_format_errors() {
        let result = check_go_output("package p\n)\n");
        assert_eq!(format_sanity_errors("x.h", &result), "x.h:2:1: unexpected closing ')'");
    }
}
