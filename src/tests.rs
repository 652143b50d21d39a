//! Test suite for the header translator
//!
//! End-to-end scenarios over the whole line loop:
//! - typedefs feeding struct fields
//! - single defines and define runs
//! - function-like macros
//! - enum value sequences and unterminated bodies
//! - comments interleaved with blocks

#[cfg(test)]
mod tests {
    use crate::config::{FirstEnumerator, TranslateOptions};
    use crate::diagnostics::DiagnosticKind;
    use crate::error::TranslateError;
    use crate::format::{Formatter, SyntaxCheck};
    use crate::helpers::COMMENT_LINE;
    use crate::modes::{BlockKind, Construct};
    use crate::transpile_main::{translate_str, Translation};

    fn options() -> TranslateOptions {
        TranslateOptions::new("p")
    }

    fn run(header: &str) -> Translation {
        translate_str(header, &options()).unwrap()
    }

    /// Translated body without the preamble
    fn body(header: &str) -> String {
        run(header).source[options().preamble().len()..].to_string()
    }

    #[test]
    fn test_typedef_used_by_struct() {
        let header = "typedef unsigned long ulong_t;\nstruct Point {\nulong_t x;\nulong_t y;\n};\n";
        assert_eq!(
            body(header),
            "type ulong_t uint32\ntype Point struct {\nX ulong_t\nY ulong_t\n}\n\n"
        );
        assert!(run(header).diagnostics.is_empty());
    }

    #[test]
    fn test_single_define_has_no_group() {
        assert_eq!(body("#define MAX_LEN 256\n"), "const MAX_LEN = 256\n");
    }

    #[test]
    fn test_function_macro_is_marked() {
        let translation = run("#define SQUARE(x) ((x)*(x))\n");
        assert!(translation.source.ends_with("//!!! #define SQUARE(x) ((x)*(x))\n"));
        assert_eq!(translation.diagnostics.len(), 1);
        assert_eq!(translation.diagnostics[0].kind, DiagnosticKind::FunctionMacro);
    }

    #[test]
    fn test_unterminated_enum_is_reported() {
        let err = translate_str("enum color {\nRED = 1,\n", &options()).unwrap_err();
        match err {
            TranslateError::UnbalancedBlock { construct, line } => {
                assert_eq!(construct, Construct::Block(BlockKind::Enum));
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unterminated_struct_and_comment() {
        let err = translate_str("\nstruct s {\nint a;\n", &options()).unwrap_err();
        assert_eq!(err.to_string(), "unterminated struct body opened at line 2");

        let err = translate_str("/* never\nclosed\n", &options()).unwrap_err();
        assert_eq!(err.to_string(), "unterminated comment opened at line 1");
    }

    #[test]
    fn test_enum_sequence() {
        let header = "enum e {\nA = 5,\nB,\nC\n};\n";
        assert_eq!(body(header), "const (\n// enum E\nA = 5\nB = 6\nC = 7\n\n)\n\n");
    }

    #[test]
    fn test_lowercase_enumerators_are_exported() {
        let header = "enum color {\nred = 1,\ngreen,\n};\n";
        assert_eq!(body(header), "const (\n// enum Color\nRed = 1\nGreen = 2\n\n)\n\n");
    }

    #[test]
    fn test_enum_joins_define_run() {
        let header = "#define X 1\n#define Y 2\nenum {\nZ\n};\n#define W 3\n\n";
        assert_eq!(
            body(header),
            "const (\nX = 1\nY = 2\n// enum\nZ = 0\n\nW = 3\n)\n\n"
        );
    }

    #[test]
    fn test_first_enumerator_flag_policy() {
        let options = options().with_first_enumerator(FirstEnumerator::Flag);
        let translation = translate_str("enum e {\nA,\nB = 2,\nC,\n};\n", &options).unwrap();
        assert!(translation.source.contains("//!!! A,\nB = 2\nC = 3\n"));
        assert_eq!(translation.diagnostics[0].kind, DiagnosticKind::UnknownEnumValue);
    }

    #[test]
    fn test_untranslated_line_round_trips() {
        let line = "extern int   errno;";
        let translation = run(&format!("{}\n", line));
        assert!(translation.source.contains(&format!("{}{}\n", COMMENT_LINE, line)));
        assert_eq!(translation.diagnostics[0].line, 1);
    }

    #[test]
    fn test_typedef_run_closed_by_blank_line() {
        let header = "typedef int a;\ntypedef a b;\n\n#define C 1\n";
        assert_eq!(body(header), "type (\na int16\nb a\n)\n\nconst C = 1\n");
    }

    #[test]
    fn test_typedef_run_closed_by_define_run() {
        let header = "typedef int a;\ntypedef int b;\n#define C 1\n#define D 2\n";
        assert_eq!(
            body(header),
            "type (\na int16\nb int16\n)\n\nconst (\nC = 1\nD = 2\n)\n\n"
        );
    }

    #[test]
    fn test_comment_inside_struct() {
        let header = "struct tm {\n/* seconds\n * [0, 60] */\nint tm_sec; /* sec */\n};\n";
        assert_eq!(
            body(header),
            "type Tm struct {\n// seconds\n// [0, 60]\nSec int16 // sec\n}\n\n"
        );
    }

    #[test]
    fn test_define_inside_struct_is_marked() {
        let translation = run("struct s {\n#define FLAG 1\nint x;\n};\n");
        assert!(translation.source.contains("//!!! #define FLAG 1\nX int16\n"));
    }

    #[test]
    fn test_no_declaration_is_dropped() {
        let header = "\
typedef struct opaque opaque_t;
#define A 1
#define B(x) (x)
enum e {
ONE = F(1),
TWO,
};
struct s {
opaque_t handle;
struct list *next;
};
";
        let translation = run(header);
        let translated = ["\nA = 1\n", "\nONE = F(1)\n", "\nHandle opaque_t\n"];
        for decl in translated {
            assert!(translation.source.contains(decl), "missing {:?}", decl);
        }
        let marked = ["type opaque_t struct opaque", "B(x)", "TWO", "Next *struct list"];
        for decl in marked {
            let found = translation
                .source
                .lines()
                .any(|line| line.starts_with(COMMENT_LINE) && line.contains(decl));
            assert!(found, "{:?} not marked", decl);
        }
        assert_eq!(translation.diagnostics.len(), 4);
    }

    #[test]
    fn test_translation_is_valid_go() {
        let header = "\
/*
 * Terminal control.
 */
typedef unsigned int tcflag_t;
typedef unsigned char cc_t;

#define NCCS 32
#define VINTR 0 /* interrupt */

enum speed { B0, B50, B75 };
enum speed2 {
B110 = 3,
B134,
};

struct termios {
tcflag_t c_iflag;
cc_t c_cc[NCCS];
};
int tcgetattr(int, struct termios *);
";
        let translation = run(header);
        assert!(SyntaxCheck.format("termios.h", &translation.source).is_ok());
        assert!(translation.source.contains("Cc [NCCS]cc_t\n"));
        assert!(translation.source.contains("VINTR = 0 // interrupt\n"));
    }
}
