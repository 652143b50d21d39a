//! Group Closing
//!
//! Typedef and const groups have no closing token in C. They end at a
//! blank line, when another kind of block starts, or at end of input.

use tracing::debug;

use crate::lowering::{OutputBuffer, TranslationState};
use crate::modes::BlockKind;

/// Close the open `type (` or `const (` group, if any.
/// Returns the kind of group that was closed.
pub fn close_open_group(state: &mut TranslationState, out: &mut OutputBuffer) -> Option<BlockKind> {
    if state.mode.is_comment() {
        return None;
    }
    let kind = state.mode.block().filter(BlockKind::closes_on_blank)?;
    out.close_group();
    state.close_block();
    debug!(block = %kind, opened_at = state.block_opened_at, "closed");
    Some(kind)
}
