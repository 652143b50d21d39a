//! Exported name derivation
//!
//! Go exports a declaration only when its name starts with an upper-case
//! letter. C field names usually carry a tag prefix (`st_mode`, `tm_sec`)
//! that reads as noise once the field lives inside a Go struct, so the
//! prefix is dropped before capitalizing:
//! ```text
//! st_mode   -> Mode
//! tm_sec    -> Sec
//! x         -> X
//! trailing_ -> Trailing_
//! ```

/// Upper-case the first character of `word`
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the exported Go name of a C identifier.
///
/// Everything up to and including the last underscore that is not the
/// final character is treated as a prefix and removed. Applying this
/// twice gives the same result as applying it once.
pub fn export_name(ident: &str) -> String {
    let stem = match ident.rfind('_') {
        Some(pos) if pos + 1 < ident.len() => &ident[pos + 1..],
        // The only underscore is the last character: look for an earlier one.
        Some(pos) => match ident[..pos].rfind('_') {
            Some(prev) => &ident[prev + 1..],
            None => ident,
        },
        None => ident,
    };
    // `pad_1` keeps its prefix: a Go name cannot start with a digit.
    if stem.starts_with(|c: char| c.is_ascii_digit()) {
        return capitalize(ident);
    }
    capitalize(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("point"), "Point");
        assert_eq!(capitalize("Point"), "Point");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("_x"), "_x");
    }

    #[test]
    fn test_prefix_is_stripped() {
        assert_eq!(export_name("st_mode"), "Mode");
        assert_eq!(export_name("a_b_c"), "C");
        assert_eq!(export_name("_hidden"), "Hidden");
        assert_eq!(export_name("pad_1"), "Pad_1");
        assert_eq!(export_name(&export_name("pad_1")), "Pad_1");
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(export_name("x"), "X");
        assert_eq!(export_name("count"), "Count");
    }

    #[test]
    fn test_final_underscore_is_kept() {
        assert_eq!(export_name("foo_"), "Foo_");
        assert_eq!(export_name("a_b_"), "B_");
    }

    #[test]
    fn test_idempotent() {
        for ident in ["st_mode", "a_b_c", "foo_", "a_b_", "x", "__", "_", "mixed_Case_name", ""] {
            let once = export_name(ident);
            assert_eq!(export_name(&once), once, "not idempotent for {:?}", ident);
        }
    }
}
