// Node and WordSpan records for the frozen trie arena.

use bytemuck::{Pod, Zeroable};

use phonecode_core::digit_map::DIGIT_COUNT;

/// Child slot value meaning "no child". Node 0 is the root, which is never
/// anybody's child.
pub const NO_CHILD: u32 = 0;

/// Trie node (48 bytes).
///
/// - `children[d]`: arena index of the child reached by digit `d`, or
///   [`NO_CHILD`]. A child always has a larger index than its parent.
/// - `words_start`, `words_len`: the node's run in the span table. Words are
///   kept in the order they were inserted.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Node {
    pub children: [u32; DIGIT_COUNT],
    pub words_start: u32,
    pub words_len: u32,
}

impl Node {
    #[inline]
    pub fn child(&self, digit: u8) -> Option<u32> {
        match self.children.get(digit as usize) {
            Some(&idx) if idx != NO_CHILD => Some(idx),
            _ => None,
        }
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        self.children.iter().any(|&c| c != NO_CHILD)
    }
}

/// Location of one surface word inside the index text block (8 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct WordSpan {
    pub offset: u32,
    pub len: u32,
}

impl WordSpan {
    #[inline]
    pub fn end(&self) -> usize {
        self.offset as usize + self.len as usize
    }
}
