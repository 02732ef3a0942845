//! Word index for phone number encoding.
//!
//! Dictionary words are keyed by their digit-code in a 10-ary trie. The trie
//! is assembled by a [`WordIndexBuilder`](builder::WordIndexBuilder) and then
//! frozen into a flat arena ([`WordIndex`](trie::WordIndex)) that is
//! read-only and can be shared between threads.
//!
//! # Architecture
//!
//! - [`node`] -- Fixed-size node and word span records
//! - [`builder`] -- Incremental trie construction
//! - [`trie`] -- Frozen index: descent, word lookup, snapshot I/O
//! - [`format`] -- Binary snapshot header parsing and validation

pub mod builder;
pub mod format;
pub mod node;
pub mod trie;

pub use builder::WordIndexBuilder;
pub use trie::{NodeId, WordIndex};

/// Error type for decoding a binary index snapshot.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("invalid magic number in index header")]
    InvalidMagic,
    #[error("snapshot too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
    #[error("snapshot size mismatch: header describes {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("invalid node {node}: {reason}")]
    InvalidNode { node: u32, reason: &'static str },
    #[error("word span {0} lies outside the text block")]
    InvalidSpan(u32),
    #[error("word text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
