// Search configuration: explicit DFS stack and token path.

use phonecode_index::NodeId;

/// Progress of a frame through its branches.
///
/// Branches run in order: complete a word stored at the frame's node, extend
/// the word in progress by the next digit, substitute the next digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    /// Next word id at the node to try as a completed word.
    Words(u32),
    Continue,
    Substitute,
    Done,
}

/// One search state: `(node, remaining digits, path, digit permitted)`.
///
/// The remaining digits are `digits[pos..]`; the path is `path[..path_len]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub node: NodeId,
    pub pos: usize,
    pub digit_permitted: bool,
    /// Whether a word branch (or the digit branch) below this frame has
    /// succeeded, in the sense of the active digit policy.
    pub found: bool,
    pub path_len: usize,
    pub stage: Stage,
}

/// A token on the search path, referencing the index instead of borrowing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathToken {
    Word(u32),
    Digit(u8),
}

/// Reusable traversal state for [`Matcher`](super::Matcher).
///
/// A configuration is loaded with [`Matcher::prepare`](super::Matcher::prepare)
/// and drained with [`Matcher::next`](super::Matcher::next). It may be reused
/// for any number of phone numbers; buffers keep their capacity between
/// searches.
#[derive(Debug, Default)]
pub struct SearchConfig {
    /// Digit subsequence of the phone number being searched.
    pub(crate) digits: Vec<u8>,
    pub(crate) frames: Vec<Frame>,
    pub(crate) path: Vec<PathToken>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with room for phone numbers of up to
    /// `max_digits` digits without reallocating.
    pub fn with_capacity(max_digits: usize) -> Self {
        Self {
            digits: Vec::with_capacity(max_digits),
            // every digit adds at most one frame for the word in progress and
            // one for the token boundary after it
            frames: Vec::with_capacity(2 * max_digits + 1),
            path: Vec::with_capacity(max_digits),
        }
    }

    /// Clear all state (called at the start of `prepare`).
    #[inline]
    pub fn reset(&mut self) {
        self.digits.clear();
        self.frames.clear();
        self.path.clear();
    }

    /// Digits of the prepared phone number.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Current number of frames on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether the search has nothing left to explore.
    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}
