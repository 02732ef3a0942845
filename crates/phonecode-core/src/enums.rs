// Shared enums: DigitPolicy, option constants

use std::fmt;
use std::str::FromStr;

/// Rule deciding when a digit may stand in for a word.
///
/// A digit is only ever considered at a word boundary that does not directly
/// follow another digit. The policy decides whether the words that start at
/// that boundary rule the digit out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitPolicy {
    /// A digit is allowed only if no dictionary word matches a prefix of the
    /// remaining digits, whether or not that word leads anywhere.
    #[default]
    PrefixMatch,
    /// A digit is allowed if no word starting here leads to a complete
    /// encoding.
    Completion,
}

impl DigitPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            DigitPolicy::PrefixMatch => "prefix-match",
            DigitPolicy::Completion => "completion",
        }
    }
}

impl fmt::Display for DigitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`DigitPolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown digit policy {0:?} (expected \"prefix-match\" or \"completion\")")]
pub struct ParsePolicyError(pub String);

impl FromStr for DigitPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix-match" | "prefix" => Ok(DigitPolicy::PrefixMatch),
            "completion" | "complete" => Ok(DigitPolicy::Completion),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Longest phone number line the input format allows.
pub const MAX_PHONE_CHARS: usize = 50;

/// Longest dictionary word the input format allows.
pub const MAX_WORD_CHARS: usize = 50;

/// Largest dictionary the input format allows.
pub const MAX_DICTIONARY_WORDS: usize = 75_000;
