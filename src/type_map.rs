//! C to Go type resolution
//!
//! Resolves a C type spelling in two steps:
//! 1. the per-file [`TypeRegistry`] of names introduced by `typedef`
//!    (user types pass through unchanged)
//! 2. the fixed table of C primitive spellings
//!
//! The table follows one fixed width convention instead of asking the host
//! platform: `int` is 16 bits, `long` is 32 bits, `long long` is 64 bits,
//! and `size_t` has the width of `unsigned long`.

use std::collections::HashSet;

use crate::helpers::collapse_whitespace;

/// Names introduced by type definitions seen so far in the current file
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    names: HashSet<String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        TypeRegistry {
            names: HashSet::new(),
        }
    }

    pub fn register(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Outcome of a type lookup.
///
/// When `matched` is false, `go_type` holds the original C spelling and the
/// caller must flag the line instead of accepting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub go_type: String,
    pub matched: bool,
}

/// Resolve a C type spelling against the registry, then the primitive table
pub fn resolve(ctype: &str, registry: &TypeRegistry) -> ResolvedType {
    let spelling = collapse_whitespace(ctype);

    if registry.contains(&spelling) {
        return ResolvedType {
            go_type: spelling,
            matched: true,
        };
    }

    match primitive(&spelling) {
        Some(go_type) => ResolvedType {
            go_type: go_type.to_string(),
            matched: true,
        },
        None => ResolvedType {
            go_type: spelling,
            matched: false,
        },
    }
}

/// Resolve the type of a declarator: `char *name[4]` is `[4]*int8`
pub fn resolve_declarator(
    ctype: &str,
    pointers: usize,
    dims: &[&str],
    registry: &TypeRegistry,
) -> ResolvedType {
    let base = resolve(ctype, registry);
    let mut go_type = dims.concat();
    go_type.push_str(&"*".repeat(pointers));
    go_type.push_str(&base.go_type);
    ResolvedType {
        go_type,
        matched: base.matched,
    }
}

/// Look up a canonical C primitive spelling in the fixed table
pub fn primitive(ctype: &str) -> Option<&'static str> {
    let go_type = match ctype {
        "char" | "signed char" => "int8",
        "unsigned char" => "uint8",
        "short" | "signed short" | "short int" | "signed short int" => "int16",
        "unsigned short" | "unsigned short int" => "uint16",
        "int" | "signed int" | "signed" => "int16",
        "unsigned int" | "unsigned" => "uint16",
        "long" | "signed long" | "long int" | "signed long int" => "int32",
        "unsigned long" | "unsigned long int" => "uint32",
        "long long" | "signed long long" | "long long int" | "signed long long int" => "int64",
        "unsigned long long" | "unsigned long long int" => "uint64",
        "size_t" => "uint32",
        "float" => "float32",
        "double" | "long double" => "float64",
        "int8_t" => "int8",
        "uint8_t" => "uint8",
        "int16_t" => "int16",
        "uint16_t" => "uint16",
        "int32_t" => "int32",
        "uint32_t" => "uint32",
        "int64_t" => "int64",
        "uint64_t" => "uint64",
        _ => return None,
    };
    Some(go_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_short() {
        let resolved = resolve("unsigned short", &TypeRegistry::new());
        assert_eq!(resolved.go_type, "uint16");
        assert!(resolved.matched);
    }

    #[test]
    fn test_unknown_struct_is_unmatched() {
        let resolved = resolve("struct foo", &TypeRegistry::new());
        assert_eq!(resolved.go_type, "struct foo");
        assert!(!resolved.matched);
    }

    #[test]
    fn test_registry_wins() {
        let mut registry = TypeRegistry::new();
        registry.register("ulong_t");
        let resolved = resolve("ulong_t", &registry);
        assert_eq!(resolved.go_type, "ulong_t");
        assert!(resolved.matched);
    }

    #[test]
    fn test_registry_shadows_primitive() {
        let mut registry = TypeRegistry::new();
        registry.register("size_t");
        assert_eq!(resolve("size_t", &registry).go_type, "size_t");
        assert_eq!(resolve("size_t", &TypeRegistry::new()).go_type, "uint32");
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let resolved = resolve("unsigned   long\tint", &TypeRegistry::new());
        assert_eq!(resolved.go_type, "uint32");
    }

    #[test]
    fn test_declarator() {
        let registry = TypeRegistry::new();
        assert_eq!(resolve_declarator("char", 1, &["[4]"], &registry).go_type, "[4]*int8");
        assert_eq!(resolve_declarator("int", 0, &["[2]", "[3]"], &registry).go_type, "[2][3]int16");
        let resolved = resolve_declarator("void", 1, &[], &registry);
        assert_eq!(resolved.go_type, "*void");
        assert!(!resolved.matched);
    }

    #[test]
    fn test_width_convention() {
        assert_eq!(primitive("char"), Some("int8"));
        assert_eq!(primitive("int"), Some("int16"));
        assert_eq!(primitive("long"), Some("int32"));
        assert_eq!(primitive("unsigned long long"), Some("uint64"));
        assert_eq!(primitive("long double"), Some("float64"));
        assert_eq!(primitive("void"), None);
    }
}
