// Incremental trie construction; `build` freezes the result into a WordIndex.

use phonecode_core::digit_map::{DIGIT_COUNT, digit_code_into};

use crate::node::{NO_CHILD, Node, WordSpan};
use crate::trie::WordIndex;

#[derive(Default)]
struct BuildNode {
    children: [u32; DIGIT_COUNT],
    /// Ids into `WordIndexBuilder::spans`, in insertion order.
    words: Vec<u32>,
}

/// Collects dictionary words into a digit-keyed trie.
///
/// Each word is stored under the path spelled by its digit-code. Characters
/// that have no digit (dashes, `"`) are ignored for the path but kept in the
/// stored word. Nodes are only created on the path of an inserted word, so
/// every leaf carries at least one word.
pub struct WordIndexBuilder {
    nodes: Vec<BuildNode>,
    spans: Vec<WordSpan>,
    text: String,
    /// Scratch buffer for the digit-code of the word being inserted.
    code: Vec<u8>,
    skipped: usize,
}

impl Default for WordIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordIndexBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![BuildNode::default()],
            spans: Vec::new(),
            text: String::new(),
            code: Vec::new(),
            skipped: 0,
        }
    }

    /// Create a builder sized for roughly `words` dictionary entries.
    pub fn with_capacity(words: usize) -> Self {
        let mut builder = Self::new();
        builder.spans.reserve(words);
        builder.text.reserve(words * 8);
        builder.nodes.reserve(words * 2);
        builder
    }

    /// Insert one word.
    ///
    /// Returns `false` (and stores nothing) if the word has no letters, since
    /// it would have an empty digit-code. Duplicate words are stored once per
    /// insertion.
    pub fn insert(&mut self, word: &str) -> bool {
        self.code.clear();
        digit_code_into(word, &mut self.code);
        if self.code.is_empty() {
            self.skipped += 1;
            tracing::debug!(word, "skipping dictionary entry without letters");
            return false;
        }

        let mut node = 0usize;
        for &digit in &self.code {
            let next = self.nodes[node].children[digit as usize];
            node = if next == NO_CHILD {
                let id = self.nodes.len() as u32;
                self.nodes.push(BuildNode::default());
                self.nodes[node].children[digit as usize] = id;
                id as usize
            } else {
                next as usize
            };
        }

        let span = WordSpan {
            offset: self.text.len() as u32,
            len: word.len() as u32,
        };
        self.text.push_str(word);
        let id = self.spans.len() as u32;
        self.spans.push(span);
        self.nodes[node].words.push(id);
        true
    }

    /// Number of words stored so far.
    pub fn word_count(&self) -> usize {
        self.spans.len()
    }

    /// Number of entries rejected by [`insert`](Self::insert).
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Freeze the trie.
    ///
    /// Word spans are regrouped so that each node's words form one contiguous
    /// run of the span table. Node indices are kept as they are.
    pub fn build(self) -> WordIndex {
        let mut spans = Vec::with_capacity(self.spans.len());
        let mut nodes = Vec::with_capacity(self.nodes.len());

        for build_node in &self.nodes {
            let words_start = spans.len() as u32;
            spans.extend(build_node.words.iter().map(|&id| self.spans[id as usize]));
            nodes.push(Node {
                children: build_node.children,
                words_start,
                words_len: build_node.words.len() as u32,
            });
        }

        tracing::debug!(
            words = spans.len(),
            nodes = nodes.len(),
            skipped = self.skipped,
            "built word index"
        );

        WordIndex::from_parts(nodes, spans, self.text)
    }
}

impl<S: AsRef<str>> Extend<S> for WordIndexBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_has_only_root() {
        let index = WordIndexBuilder::new().build();
        assert_eq!(index.node_count(), 1);
        assert_eq!(index.word_count(), 0);
        assert_eq!(index.words(index.root()).count(), 0);
    }

    #[test]
    fn insert_creates_one_node_per_digit() {
        let mut builder = WordIndexBuilder::new();
        assert!(builder.insert("Tor"));
        let index = builder.build();
        // root + 4 + 8 + 2
        assert_eq!(index.node_count(), 4);
        let node = index.lookup(&[4, 8, 2]).unwrap();
        assert_eq!(index.words(node).collect::<Vec<_>>(), vec!["Tor"]);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let mut builder = WordIndexBuilder::new();
        builder.extend(["Tor", "Torf", "fort"]);
        let index = builder.build();
        // 4-8-2 for Tor, one more node for the final 4 shared by Torf and fort
        assert_eq!(index.node_count(), 5);
        let node = index.lookup(&[4, 8, 2, 4]).unwrap();
        assert_eq!(index.words(node).collect::<Vec<_>>(), vec!["Torf", "fort"]);
    }

    #[test]
    fn letterless_words_are_skipped() {
        let mut builder = WordIndexBuilder::new();
        assert!(!builder.insert("--"));
        assert!(!builder.insert(""));
        assert!(builder.insert("a"));
        assert_eq!(builder.skipped_count(), 2);
        assert_eq!(builder.word_count(), 1);
        let index = builder.build();
        assert!(!index.has_words(index.root()));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut builder = WordIndexBuilder::new();
        builder.extend(["da", "da"]);
        let index = builder.build();
        let node = index.lookup(&[3, 5]).unwrap();
        assert_eq!(index.words(node).collect::<Vec<_>>(), vec!["da", "da"]);
    }

    #[test]
    fn runs_are_contiguous_after_interleaved_inserts() {
        let mut builder = WordIndexBuilder::with_capacity(4);
        builder.extend(["mir", "an", "Mix", "Tor"]);
        let index = builder.build();
        let node = index.lookup(&[5, 6, 2]).unwrap();
        assert_eq!(index.words(node).collect::<Vec<_>>(), vec!["mir", "Mix"]);
        let node = index.lookup(&[5, 1]).unwrap();
        assert_eq!(index.words(node).collect::<Vec<_>>(), vec!["an"]);
    }
}
