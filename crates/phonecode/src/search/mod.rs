// Backtracking search over the word index.
//
// The search is a depth-first walk over states
// `(trie node, remaining digits, token path, digit permitted)`, kept on an
// explicit stack in `SearchConfig`. `Matcher::next` resumes the walk where the
// previous call left it and stops at the next complete encoding, so callers
// can pull encodings one at a time.

mod config;

pub use config::SearchConfig;

use std::iter::FusedIterator;

use phonecode_core::enums::DigitPolicy;
use phonecode_core::phone::phone_digits_into;
use phonecode_core::token::{Encoding, Token};
use phonecode_index::{NodeId, WordIndex};

use config::{Frame, PathToken, Stage};

/// Encoding search over one [`WordIndex`].
///
/// `Matcher` holds no per-search state and is cheap to copy; all traversal
/// state lives in a [`SearchConfig`]. The `prepare` + `next` pair works like
/// a coroutine: `prepare` loads a phone number, each `next` call yields one
/// encoding.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    index: &'a WordIndex,
    policy: DigitPolicy,
}

impl<'a> Matcher<'a> {
    pub fn new(index: &'a WordIndex, policy: DigitPolicy) -> Self {
        Self { index, policy }
    }

    pub fn index(&self) -> &'a WordIndex {
        self.index
    }

    pub fn policy(&self) -> DigitPolicy {
        self.policy
    }

    /// Load `phone` into `config`, discarding any previous search.
    ///
    /// Returns `false` if the phone number has no digits, in which case
    /// there is nothing to encode and `next` yields nothing.
    pub fn prepare(&self, config: &mut SearchConfig, phone: &str) -> bool {
        config.reset();
        phone_digits_into(phone, &mut config.digits);
        if config.digits.is_empty() {
            return false;
        }
        config.frames.push(self.frame(self.index.root(), 0, true, 0));
        true
    }

    /// Advance to the next complete encoding.
    ///
    /// On success the encoding's tokens are written to `output` (replacing
    /// its contents) and `true` is returned. Returns `false` once the search
    /// space is exhausted.
    pub fn next(&self, config: &mut SearchConfig, output: &mut Vec<Token<'a>>) -> bool {
        let len = config.digits.len();

        while let Some(&frame) = config.frames.last() {
            let top = config.frames.len() - 1;
            config.path.truncate(frame.path_len);

            match frame.stage {
                Stage::Words(id) => {
                    if id >= self.index.word_ids(frame.node).end {
                        config.frames[top].stage = if frame.pos == len {
                            Stage::Done
                        } else {
                            Stage::Continue
                        };
                        continue;
                    }
                    config.frames[top].stage = Stage::Words(id + 1);

                    // A word ends here. Under the prefix rule that alone rules
                    // out a digit at this frame's boundary.
                    if self.policy == DigitPolicy::PrefixMatch {
                        config.frames[top].found = true;
                    }

                    if frame.pos == len {
                        config.frames[top].found = true;
                        self.emit(config, PathToken::Word(id), output);
                        return true;
                    }

                    config.path.push(PathToken::Word(id));
                    let path_len = config.path.len();
                    config
                        .frames
                        .push(self.frame(self.index.root(), frame.pos, true, path_len));
                }
                Stage::Continue => {
                    config.frames[top].stage = Stage::Substitute;
                    let digit = config.digits[frame.pos];
                    if let Some(child) = self.index.child(frame.node, digit) {
                        config
                            .frames
                            .push(self.frame(child, frame.pos + 1, false, frame.path_len));
                    }
                }
                Stage::Substitute => {
                    config.frames[top].stage = Stage::Done;
                    if !frame.digit_permitted || frame.found {
                        continue;
                    }

                    let digit = config.digits[frame.pos];
                    if frame.pos + 1 == len {
                        config.frames[top].found = true;
                        self.emit(config, PathToken::Digit(digit), output);
                        return true;
                    }

                    config.path.push(PathToken::Digit(digit));
                    let path_len = config.path.len();
                    config
                        .frames
                        .push(self.frame(self.index.root(), frame.pos + 1, false, path_len));
                }
                Stage::Done => {
                    config.frames.pop();
                    if let Some(parent) = config.frames.last_mut() {
                        parent.found |= frame.found;
                    }
                }
            }
        }

        false
    }

    fn frame(&self, node: NodeId, pos: usize, digit_permitted: bool, path_len: usize) -> Frame {
        Frame {
            node,
            pos,
            digit_permitted,
            found: false,
            path_len,
            stage: Stage::Words(self.index.word_ids(node).start),
        }
    }

    /// Write the current path plus `last` to `output`.
    fn emit(&self, config: &SearchConfig, last: PathToken, output: &mut Vec<Token<'a>>) {
        output.clear();
        output.extend(
            config
                .path
                .iter()
                .chain(std::iter::once(&last))
                .map(|&token| self.resolve(token)),
        );
    }

    #[inline]
    fn resolve(&self, token: PathToken) -> Token<'a> {
        match token {
            PathToken::Word(id) => Token::Word(self.index.word(id)),
            PathToken::Digit(d) => Token::Digit(d),
        }
    }
}

/// Lazy sequence of the encodings of one phone number.
///
/// Created by [`PhoneEncoder::encode`](crate::encoder::PhoneEncoder::encode)
/// or [`Encodings::new`]. Each item is produced on demand; the full result
/// set is never held in memory.
#[derive(Debug)]
pub struct Encodings<'a> {
    matcher: Matcher<'a>,
    config: SearchConfig,
    phone: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Encodings<'a> {
    pub fn new(matcher: Matcher<'a>, phone: &'a str) -> Self {
        let mut config = SearchConfig::with_capacity(phone.len());
        matcher.prepare(&mut config, phone);
        Self {
            matcher,
            config,
            phone,
            tokens: Vec::new(),
        }
    }

    /// The phone number being encoded.
    pub fn phone(&self) -> &'a str {
        self.phone
    }
}

impl<'a> Iterator for Encodings<'a> {
    type Item = Encoding<'a>;

    fn next(&mut self) -> Option<Encoding<'a>> {
        if self.matcher.next(&mut self.config, &mut self.tokens) {
            Some(Encoding::new(self.phone, self.tokens.clone()))
        } else {
            None
        }
    }
}

impl FusedIterator for Encodings<'_> {}
