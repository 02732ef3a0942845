// Token and Encoding public API types

use std::fmt;

use crate::digit_map::digit_code_into;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One unit of an encoding: a dictionary word or a single literal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// A dictionary word in its original surface form.
    Word(&'a str),
    /// A digit (0-9) of the phone number kept as is.
    Digit(u8),
}

impl Token<'_> {
    /// Whether this token is a literal digit.
    #[inline]
    pub fn is_digit(&self) -> bool {
        matches!(self, Token::Digit(_))
    }

    /// Appends the digits this token stands for to `out`.
    pub fn digits_into(&self, out: &mut Vec<u8>) {
        match *self {
            Token::Word(word) => digit_code_into(word, out),
            Token::Digit(d) => out.push(d),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Word(word) => f.write_str(word),
            Token::Digit(d) => write!(f, "{}", char::from(b'0' + d)),
        }
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// A complete encoding of one phone number.
///
/// `Display` renders the output line: the phone number exactly as given, a
/// colon, one space, then the tokens separated by single spaces.
///
/// ```
/// use phonecode_core::token::{Encoding, Token};
///
/// let enc = Encoding::new("4824", vec![Token::Word("Tor"), Token::Digit(4)]);
/// assert_eq!(enc.to_string(), "4824: Tor 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoding<'a> {
    phone: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Encoding<'a> {
    pub fn new(phone: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Self { phone, tokens }
    }

    /// The phone number, separators included.
    pub fn phone(&self) -> &'a str {
        self.phone
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }

    /// The token part of the output line (`"Tor 4"`).
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match *token {
                Token::Word(word) => out.push_str(word),
                Token::Digit(d) => out.push(char::from(b'0' + d)),
            }
        }
        out
    }

    /// Digits spelled by the tokens, in order.
    pub fn digits(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for token in &self.tokens {
            token.digits_into(&mut out);
        }
        out
    }

    /// Whether two digit tokens follow each other anywhere in the encoding.
    pub fn has_adjacent_digits(&self) -> bool {
        self.tokens
            .windows(2)
            .any(|pair| pair[0].is_digit() && pair[1].is_digit())
    }
}

impl fmt::Display for Encoding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phone)?;
        f.write_str(":")?;
        for token in &self.tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}
