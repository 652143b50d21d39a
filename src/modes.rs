//! Mode tracking for the header translator
//!
//! The translator is always in exactly one mode:
//! - `None`: top level, no block open
//! - `Comment`: inside a multi-line `/* ... */` comment
//! - `TypeBlock`: inside a `type ( ... )` group of consecutive typedefs
//! - `ConstBlock`: inside a `const ( ... )` group of defines and/or enums
//! - `Struct`: inside a struct body
//! - `Enum`: inside an enum body (always nested in a const block)
//!
//! A comment can interrupt any block; it remembers which block to resume.

use std::fmt;

//===========================================================================
// BLOCKS
// Multi-line groupings with an explicit open/close boundary.
//===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    TypeBlock,
    ConstBlock,
    Struct,
    Enum,
}

impl BlockKind {
    /// Typedef and const groups are closed by a blank line or by another
    /// block opening; struct and enum bodies need their closing brace.
    pub fn closes_on_blank(&self) -> bool {
        matches!(self, BlockKind::TypeBlock | BlockKind::ConstBlock)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::TypeBlock => write!(f, "typedef block"),
            BlockKind::ConstBlock => write!(f, "const block"),
            BlockKind::Struct => write!(f, "struct body"),
            BlockKind::Enum => write!(f, "enum body"),
        }
    }
}

//===========================================================================
// MODE
//===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    None,
    Comment {
        resume: Option<BlockKind>,
    },
    TypeBlock,
    ConstBlock,
    Struct,
    Enum,
}

impl Mode {
    pub fn from_block(block: Option<BlockKind>) -> Self {
        match block {
            None => Mode::None,
            Some(BlockKind::TypeBlock) => Mode::TypeBlock,
            Some(BlockKind::ConstBlock) => Mode::ConstBlock,
            Some(BlockKind::Struct) => Mode::Struct,
            Some(BlockKind::Enum) => Mode::Enum,
        }
    }

    /// Block that is open, including one interrupted by a comment
    pub fn block(&self) -> Option<BlockKind> {
        match self {
            Mode::None => None,
            Mode::Comment { resume } => *resume,
            Mode::TypeBlock => Some(BlockKind::TypeBlock),
            Mode::ConstBlock => Some(BlockKind::ConstBlock),
            Mode::Struct => Some(BlockKind::Struct),
            Mode::Enum => Some(BlockKind::Enum),
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Mode::Comment { .. })
    }

    /// Top-level declarations (typedef, define) are only recognized
    /// outside struct and enum bodies.
    pub fn accepts_top_level(&self) -> bool {
        matches!(self, Mode::None | Mode::TypeBlock | Mode::ConstBlock)
    }
}

//===========================================================================
// CONSTRUCTS
// What can be left open when the input ends.
//===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Comment,
    Block(BlockKind),
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::Comment => write!(f, "comment"),
            Construct::Block(kind) => kind.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_resumes_block() {
        let mode = Mode::Comment {
            resume: Some(BlockKind::Struct),
        };
        assert!(mode.is_comment());
        assert_eq!(mode.block(), Some(BlockKind::Struct));
        assert_eq!(Mode::from_block(mode.block()), Mode::Struct);
    }

    #[test]
    fn test_top_level() {
        assert!(Mode::None.accepts_top_level());
        assert!(Mode::ConstBlock.accepts_top_level());
        assert!(!Mode::Enum.accepts_top_level());
        assert!(!Mode::Struct.accepts_top_level());
    }

    #[test]
    fn test_display() {
        assert_eq!(Construct::Block(BlockKind::Enum).to_string(), "enum body");
        assert_eq!(Construct::Comment.to_string(), "comment");
    }
}
