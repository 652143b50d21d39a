//! Lowering Module
//!
//! State and plumbing shared by every translator: the mutable per-file
//! state, the output buffer, and the look-ahead line source.

// State management
pub mod transpiler_state;
pub mod output_buffer;

// Look-ahead utilities
pub mod lookahead_lowering;

// Re-exports for convenience
pub use transpiler_state::TranslationState;
pub use output_buffer::OutputBuffer;
pub use lookahead_lowering::{check_next_is_define, check_next_is_typedef, LineSource};
