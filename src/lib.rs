//! goheader - C header to Go translator
//!
//! Translates the declarations of a C header (comments, typedefs,
//! `#define` constants, enums and structs) into Go source, one line at a
//! time. Anything that cannot be translated is kept in the output behind
//! the `//!!! ` marker instead of being dropped.
//!
//! ```
//! use goheader::{translate_str, TranslateOptions};
//!
//! let translation = translate_str("#define MAX_LEN 256\n", &TranslateOptions::new("limits")).unwrap();
//! assert!(translation.source.ends_with("package limits\n\nconst MAX_LEN = 256\n"));
//! ```

// Core modules
pub mod config;
pub mod enum_def;
pub mod error;
pub mod diagnostics;
pub mod identifier;
pub mod type_map;

// Line-level components
pub mod helpers;
pub mod modes;
pub mod detection;

// Translation pipeline
pub mod lowering;
pub mod translate;
pub mod transpile_main;

// Output and batch processing
pub mod go_sanity;
pub mod format;
pub mod driver;

mod tests;

// Re-exports for convenience
pub use config::{FirstEnumerator, System, TranslateOptions};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use driver::{process_file, run_batch, BatchReport, FileOutput, ProcessOptions, Processed};
pub use error::{FormatError, ProcessError, TranslateError};
pub use format::{Formatter, FormatterKind, Gofmt, SyntaxCheck};
pub use helpers::COMMENT_LINE;
pub use transpile_main::{translate, translate_str, Translation};
