//! Translator State Management
//!
//! Contains the `TranslationState` struct which holds all mutable state
//! of one file translation. It is created when a file starts, mutated
//! line by line and dropped at end of file; nothing persists across files.

use crate::config::FirstEnumerator;
use crate::enum_def::EnumValueTracker;
use crate::modes::{BlockKind, Construct, Mode};
use crate::type_map::TypeRegistry;

pub struct TranslationState {
    pub mode: Mode,
    /// Line of the innermost open block
    pub block_opened_at: usize,
    /// Line of the open multi-line comment
    pub comment_opened_at: usize,
    pub enum_values: EnumValueTracker,
    pub registry: TypeRegistry,
    first_enumerator: FirstEnumerator,
}

impl TranslationState {
    pub fn new(first_enumerator: FirstEnumerator) -> Self {
        Self {
            mode: Mode::None,
            block_opened_at: 0,
            comment_opened_at: 0,
            enum_values: EnumValueTracker::start(first_enumerator),
            registry: TypeRegistry::new(),
            first_enumerator,
        }
    }

    /// Enter a multi-line comment, remembering the block it interrupts
    pub fn enter_comment(&mut self, line: usize) {
        self.mode = Mode::Comment {
            resume: self.mode.block(),
        };
        self.comment_opened_at = line;
    }

    /// Leave a multi-line comment, resuming the interrupted block
    pub fn exit_comment(&mut self) {
        self.mode = Mode::from_block(self.mode.block());
    }

    pub fn open_block(&mut self, kind: BlockKind, line: usize) {
        self.mode = Mode::from_block(Some(kind));
        self.block_opened_at = line;
        if kind == BlockKind::Enum {
            self.enum_values = EnumValueTracker::start(self.first_enumerator);
        }
    }

    pub fn close_block(&mut self) {
        self.mode = Mode::None;
    }

    /// An enum body lives inside a const block; closing it resumes that block
    pub fn close_enum(&mut self) {
        self.mode = Mode::ConstBlock;
    }

    /// Construct left open that the final flush cannot close
    pub fn unclosed(&self) -> Option<(Construct, usize)> {
        match self.mode {
            Mode::Comment { .. } => Some((Construct::Comment, self.comment_opened_at)),
            Mode::Struct => Some((Construct::Block(BlockKind::Struct), self.block_opened_at)),
            Mode::Enum => Some((Construct::Block(BlockKind::Enum), self.block_opened_at)),
            Mode::None | Mode::TypeBlock | Mode::ConstBlock => None,
        }
    }
}

impl Default for TranslationState {
    fn default() -> Self {
        Self::new(FirstEnumerator::default())
    }
}
