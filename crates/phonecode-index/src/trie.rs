// Frozen word index: trie descent, word lookup and snapshot I/O.

use std::ops::Range;

use bytemuck::Zeroable;

use phonecode_core::digit_map::digit_code;

use crate::IndexError;
use crate::builder::WordIndexBuilder;
use crate::format::{self, HEADER_SIZE, IndexHeader};
use crate::node::{NO_CHILD, Node, WordSpan};

/// Handle to a node of a [`WordIndex`].
///
/// Only meaningful for the index that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node: empty digit-code.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn is_root(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Read-only digit-code trie over a dictionary.
///
/// Nodes live in one arena; each node's words are one run of the span table,
/// and all surface forms share one text block. Descending one digit is a
/// single array access, so looking up a digit-code costs one step per digit
/// regardless of dictionary size.
#[derive(Clone, PartialEq, Eq)]
pub struct WordIndex {
    nodes: Vec<Node>,
    spans: Vec<WordSpan>,
    text: String,
}

impl std::fmt::Debug for WordIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordIndex")
            .field("node_count", &self.nodes.len())
            .field("word_count", &self.spans.len())
            .field("text_len", &self.text.len())
            .finish()
    }
}

impl Default for WordIndex {
    fn default() -> Self {
        WordIndexBuilder::new().build()
    }
}

impl WordIndex {
    /// Build an index from dictionary words (already trimmed of line endings).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = WordIndexBuilder::new();
        builder.extend(words);
        builder.build()
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, spans: Vec<WordSpan>, text: String) -> Self {
        Self { nodes, spans, text }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow the edge for `digit` out of `node`.
    #[inline]
    pub fn child(&self, node: NodeId, digit: u8) -> Option<NodeId> {
        self.nodes[node.index()].child(digit).map(NodeId)
    }

    /// Descend from the root along `code`.
    pub fn lookup(&self, code: &[u8]) -> Option<NodeId> {
        code.iter()
            .try_fold(self.root(), |node, &digit| self.child(node, digit))
    }

    /// Ids of the words whose digit-code ends exactly at `node`.
    #[inline]
    pub fn word_ids(&self, node: NodeId) -> Range<u32> {
        let n = &self.nodes[node.index()];
        n.words_start..n.words_start + n.words_len
    }

    #[inline]
    pub fn has_words(&self, node: NodeId) -> bool {
        self.nodes[node.index()].words_len > 0
    }

    /// Surface form of the word with the given id.
    #[inline]
    pub fn word(&self, id: u32) -> &str {
        let span = self.spans[id as usize];
        &self.text[span.offset as usize..span.end()]
    }

    /// Words stored at `node`, in insertion order.
    pub fn words(&self, node: NodeId) -> Words<'_> {
        let range = self.word_ids(node);
        Words {
            index: self,
            spans: self.spans[range.start as usize..range.end as usize].iter(),
        }
    }

    /// Whether `word` (exact surface form) is in the index.
    pub fn contains(&self, word: &str) -> bool {
        let code = digit_code(word);
        if code.is_empty() {
            return false;
        }
        self.lookup(&code)
            .is_some_and(|node| self.words(node).any(|w| w == word))
    }

    pub fn word_count(&self) -> usize {
        self.spans.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    // =========================================================================
    // Snapshot I/O
    // =========================================================================

    /// Serialize the index into the binary snapshot format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let nodes: &[u8] = bytemuck::cast_slice(&self.nodes);
        let spans: &[u8] = bytemuck::cast_slice(&self.spans);
        let mut out =
            Vec::with_capacity(HEADER_SIZE + nodes.len() + spans.len() + self.text.len());
        format::write_header(
            &IndexHeader {
                node_count: self.nodes.len() as u32,
                span_count: self.spans.len() as u32,
                text_len: self.text.len() as u32,
            },
            &mut out,
        );
        out.extend_from_slice(nodes);
        out.extend_from_slice(spans);
        out.extend_from_slice(self.text.as_bytes());
        out
    }

    /// Load an index from a binary snapshot.
    ///
    /// The node and span tables are copied into owned, aligned vectors (the
    /// source slice may not be 4-byte aligned) and the trie is checked to be a
    /// proper tree before it is returned.
    pub fn from_bytes(data: &[u8]) -> Result<Self, IndexError> {
        let header = format::parse_header(data)?;

        let node_bytes = header.node_count as usize * size_of::<Node>();
        let span_bytes = header.span_count as usize * size_of::<WordSpan>();
        let expected = HEADER_SIZE + node_bytes + span_bytes + header.text_len as usize;
        if data.len() < expected {
            return Err(IndexError::TooShort {
                expected,
                actual: data.len(),
            });
        }
        if data.len() > expected {
            return Err(IndexError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        if header.node_count == 0 {
            return Err(IndexError::InvalidNode {
                node: 0,
                reason: "missing root node",
            });
        }

        let mut pos = HEADER_SIZE;
        let mut nodes = vec![Node::zeroed(); header.node_count as usize];
        bytemuck::cast_slice_mut::<Node, u8>(&mut nodes)
            .copy_from_slice(&data[pos..pos + node_bytes]);
        pos += node_bytes;

        let mut spans = vec![WordSpan { offset: 0, len: 0 }; header.span_count as usize];
        bytemuck::cast_slice_mut::<WordSpan, u8>(&mut spans)
            .copy_from_slice(&data[pos..pos + span_bytes]);
        pos += span_bytes;

        let text = std::str::from_utf8(&data[pos..])?.to_owned();

        validate_nodes(&nodes, spans.len())?;
        validate_spans(&spans, &text)?;

        Ok(Self { nodes, spans, text })
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Checks that the node table forms a tree rooted at node 0 with no dead
/// nodes, and that every word run lies inside the span table.
fn validate_nodes(nodes: &[Node], span_count: usize) -> Result<(), IndexError> {
    let mut referenced = vec![false; nodes.len()];
    for (i, node) in nodes.iter().enumerate() {
        let id = i as u32;
        for &child in &node.children {
            if child == NO_CHILD {
                continue;
            }
            if child <= id || child as usize >= nodes.len() {
                return Err(IndexError::InvalidNode {
                    node: id,
                    reason: "child index out of order",
                });
            }
            if std::mem::replace(&mut referenced[child as usize], true) {
                return Err(IndexError::InvalidNode {
                    node: child,
                    reason: "node has more than one parent",
                });
            }
        }
        let end = node.words_start as usize + node.words_len as usize;
        if end > span_count {
            return Err(IndexError::InvalidNode {
                node: id,
                reason: "word run outside the span table",
            });
        }
        if i > 0 && node.words_len == 0 && !node.has_children() {
            return Err(IndexError::InvalidNode {
                node: id,
                reason: "node has neither words nor children",
            });
        }
    }
    if let Some(orphan) = referenced.iter().skip(1).position(|&r| !r) {
        return Err(IndexError::InvalidNode {
            node: orphan as u32 + 1,
            reason: "node is not reachable from the root",
        });
    }
    if nodes[0].words_len > 0 {
        return Err(IndexError::InvalidNode {
            node: 0,
            reason: "root node carries words",
        });
    }
    Ok(())
}

fn validate_spans(spans: &[WordSpan], text: &str) -> Result<(), IndexError> {
    for (i, span) in spans.iter().enumerate() {
        let start = span.offset as usize;
        let end = span.end();
        if end > text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Err(IndexError::InvalidSpan(i as u32));
        }
    }
    Ok(())
}

/// Iterator over the words stored at one node.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    index: &'a WordIndex,
    spans: std::slice::Iter<'a, WordSpan>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        let span = self.spans.next()?;
        Some(&self.index.text[span.offset as usize..span.end()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.spans.size_hint()
    }
}

impl ExactSizeIterator for Words<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "an", "blau", "Bo\"", "Boot", "bo\"s", "da", "Fee", "fern", "Fest", "fort", "je",
        "jemand", "mir", "Mix", "Mixer", "Name", "neu", "o\"d", "Ort", "so", "Tor", "Torf",
        "Wasser",
    ];

    fn sample_index() -> WordIndex {
        WordIndex::from_words(SAMPLE)
    }

    #[test]
    fn every_word_found_once_at_its_code() {
        let index = sample_index();
        assert_eq!(index.word_count(), SAMPLE.len());
        for &word in SAMPLE {
            let node = index.lookup(&digit_code(word)).unwrap();
            let hits = index.words(node).filter(|&w| w == word).count();
            assert_eq!(hits, 1, "{word}");
            assert!(index.contains(word));
        }
    }

    #[test]
    fn colliding_codes_share_a_node() {
        let index = sample_index();
        let node = index.lookup(&[5, 6, 2]).unwrap();
        assert_eq!(index.words(node).collect::<Vec<_>>(), vec!["mir", "Mix"]);
        let node = index.lookup(&[7, 8]).unwrap();
        assert_eq!(index.words(node).collect::<Vec<_>>(), vec!["Bo\""]);
    }

    #[test]
    fn prefix_nodes_without_words() {
        let index = sample_index();
        let node = index.lookup(&[5, 6]).unwrap();
        assert!(!index.has_words(node));
        assert!(index.child(node, 2).is_some());
        assert!(index.lookup(&[9, 9, 9]).is_none());
    }

    #[test]
    fn contains_requires_exact_surface_form() {
        let index = sample_index();
        assert!(index.contains("Tor"));
        assert!(!index.contains("tor"));
        assert!(!index.contains("Bo"));
        assert!(!index.contains("-"));
    }

    #[test]
    fn out_of_range_digit_has_no_child() {
        let index = sample_index();
        assert_eq!(index.child(index.root(), 10), None);
    }

    #[test]
    fn collect_from_iterator() {
        let index: WordIndex = ["so", "Tor"].into_iter().collect();
        assert_eq!(index.word_count(), 2);
        assert!(index.contains("so"));
    }

    #[test]
    fn snapshot_roundtrip() {
        let index = sample_index();
        let bytes = index.to_bytes();
        let loaded = WordIndex::from_bytes(&bytes).unwrap();
        assert_eq!(loaded, index);
        assert_eq!(loaded.to_bytes(), bytes);
    }

    #[test]
    fn empty_index_snapshot() {
        let index = WordIndex::default();
        let loaded = WordIndex::from_bytes(&index.to_bytes()).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(loaded.node_count(), 1);
    }

    #[test]
    fn reject_truncated_snapshot() {
        let bytes = sample_index().to_bytes();
        let err = WordIndex::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, IndexError::TooShort { .. }));
    }

    #[test]
    fn reject_trailing_bytes() {
        let mut bytes = sample_index().to_bytes();
        bytes.push(0);
        let err = WordIndex::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, IndexError::SizeMismatch { .. }));
    }

    #[test]
    fn reject_backward_child_edge() {
        let index = WordIndex::from_words(["Tor"]);
        let mut bytes = index.to_bytes();
        // node 1 (digit 4), child slot 8 -> point it back at the root's child
        let slot = HEADER_SIZE + size_of::<Node>() + 8 * 4;
        bytes[slot..slot + 4].copy_from_slice(&1u32.to_le_bytes());
        let err = WordIndex::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, IndexError::InvalidNode { node: 1, .. }));
    }

    #[test]
    fn reject_span_outside_text() {
        let index = WordIndex::from_words(["so"]);
        let mut bytes = index.to_bytes();
        let span_at = HEADER_SIZE + index.node_count() * size_of::<Node>();
        bytes[span_at + 4..span_at + 8].copy_from_slice(&100u32.to_le_bytes());
        let err = WordIndex::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, IndexError::InvalidSpan(0)));
    }

    #[test]
    fn reject_invalid_utf8_text() {
        let index = WordIndex::from_words(["so"]);
        let mut bytes = index.to_bytes();
        let last = bytes.len() - 1;
        bytes[last] = 0xFF;
        let err = WordIndex::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, IndexError::InvalidUtf8(_)));
    }
}
