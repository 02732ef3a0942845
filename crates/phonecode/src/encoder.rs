// PhoneEncoder: top-level integration point.
//
// Owns the word index and the encoding options, and hands out lazy encoding
// iterators or drives a callback per encoding. The index is never mutated
// after construction, so one encoder can serve any number of threads.

use phonecode_core::enums::DigitPolicy;
use phonecode_core::token::Encoding;
use phonecode_index::format::is_snapshot;
use phonecode_index::{IndexError, WordIndex};

use crate::search::{Encodings, Matcher, SearchConfig};

/// Error type for PhoneEncoder construction failures.
#[derive(Debug, thiserror::Error)]
pub enum EncoderError {
    /// A binary index snapshot could not be decoded.
    #[error("failed to load index snapshot: {0}")]
    Snapshot(#[from] IndexError),

    /// A word list was not valid UTF-8.
    #[error("word list is not valid UTF-8: {0}")]
    InvalidWordList(#[from] std::str::Utf8Error),
}

/// Options for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// When a digit may stand in for a word. Default: `PrefixMatch`.
    pub digit_policy: DigitPolicy,
}

/// Encodes phone numbers against one dictionary.
#[derive(Debug, Clone)]
pub struct PhoneEncoder {
    index: WordIndex,
    options: EncodeOptions,
}

impl PhoneEncoder {
    pub fn new(index: WordIndex) -> Self {
        Self::with_options(index, EncodeOptions::default())
    }

    pub fn with_options(index: WordIndex, options: EncodeOptions) -> Self {
        Self { index, options }
    }

    /// Build the index from dictionary words, one word per item.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(WordIndex::from_words(words))
    }

    /// Create an encoder from raw dictionary data.
    ///
    /// `data` is either an index snapshot (see [`WordIndex::to_bytes`]) or a
    /// UTF-8 word list with one word per line. Surrounding whitespace is
    /// trimmed from each line and empty lines are skipped.
    pub fn from_bytes(data: &[u8]) -> Result<Self, EncoderError> {
        if is_snapshot(data) {
            tracing::debug!(bytes = data.len(), "loading index snapshot");
            return Ok(Self::new(WordIndex::from_bytes(data)?));
        }
        tracing::debug!(bytes = data.len(), "loading word list");
        let text = std::str::from_utf8(data)?;
        Ok(Self::from_words(dictionary_lines(text)))
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    pub fn set_digit_policy(&mut self, policy: DigitPolicy) {
        self.options.digit_policy = policy;
    }

    /// A matcher over this encoder's index with its current options.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.index, self.options.digit_policy)
    }

    /// Lazily enumerate the encodings of `phone`.
    ///
    /// Order among the encodings of one number is not specified.
    pub fn encode<'a>(&'a self, phone: &'a str) -> Encodings<'a> {
        Encodings::new(self.matcher(), phone)
    }

    /// Call `f` once per encoding of `phone`. Returns the number of encodings.
    pub fn for_each_encoding<F>(&self, phone: &str, f: F) -> usize
    where
        F: FnMut(&Encoding<'_>),
    {
        let mut config = SearchConfig::with_capacity(phone.len());
        self.for_each_encoding_with(&mut config, phone, f)
    }

    /// Like [`for_each_encoding`](Self::for_each_encoding), but reuses the
    /// buffers of `config`. Useful when streaming many numbers.
    pub fn for_each_encoding_with<F>(&self, config: &mut SearchConfig, phone: &str, mut f: F) -> usize
    where
        F: FnMut(&Encoding<'_>),
    {
        let matcher = self.matcher();
        if !matcher.prepare(config, phone) {
            return 0;
        }

        let mut count = 0;
        let mut tokens = Vec::new();
        while matcher.next(config, &mut tokens) {
            let encoding = Encoding::new(phone, tokens);
            f(&encoding);
            tokens = encoding.into_tokens();
            count += 1;
        }
        tracing::trace!(phone, count, "encoded phone number");
        count
    }

    /// The token part (`"Tor 4"`) of every encoding of `phone`.
    pub fn encode_to_strings(&self, phone: &str) -> Vec<String> {
        self.encode(phone).map(|e| e.text()).collect()
    }
}

/// Trimmed, non-empty lines of a word list.
pub fn dictionary_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
