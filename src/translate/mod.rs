//! Translation Module
//!
//! Contains modules for translating C header constructs to Go declarations.
//! Each module handles one kind of construct and writes into the shared
//! [`OutputBuffer`](crate::lowering::OutputBuffer).

// Block handling
pub mod comment_translate;
pub mod group_translate;

// Declaration translations
pub mod typedef_translate;
pub mod define_translate;

// Definition translations
pub mod struct_def_translate;
pub mod enum_def_translate;

// Passthrough and fallback
pub mod native_passthrough_translate;

// Re-exports for convenience
pub use comment_translate::{process_comment_line, process_comment_open, CommentResult};
pub use group_translate::close_open_group;
pub use typedef_translate::{process_typedef_line, TypedefResult};
pub use define_translate::{is_function_macro, process_define_line, DefineResult};
pub use struct_def_translate::{
    process_struct_close, process_struct_field, process_struct_open, process_struct_unknown,
    StructDefResult,
};
pub use enum_def_translate::{
    process_enum_close, process_enum_open, process_enum_unknown, process_enumerator,
    EnumDefResult,
};
pub use native_passthrough_translate::{process_native_line, process_untranslated_line};
