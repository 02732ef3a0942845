// Letter-to-digit mapping and digit-code computation

// ---------------------------------------------------------------------------
// Digit table
// ---------------------------------------------------------------------------

/// Digit for each ASCII letter, indexed by `letter - 'a'`.
///
/// ```text
/// E | J N Q | R W X | D S Y | F T | A M | C I V | B K U | L O P | G H Z
/// 0 |   1   |   2   |   3   |  4  |  5  |   6   |   7   |   8   |   9
/// ```
const LETTER_DIGITS: [u8; 26] = [
    5, // a
    7, // b
    6, // c
    3, // d
    0, // e
    4, // f
    9, // g
    9, // h
    6, // i
    1, // j
    7, // k
    8, // l
    5, // m
    1, // n
    8, // o
    8, // p
    1, // q
    2, // r
    3, // s
    4, // t
    7, // u
    6, // v
    2, // w
    2, // x
    3, // y
    9, // z
];

/// Number of distinct digits (and of trie branches per node).
pub const DIGIT_COUNT: usize = 10;

/// Returns the digit a letter encodes to, case-insensitively.
///
/// Anything that is not an ASCII letter (dashes, the `"` umlaut marker,
/// digits, other scripts) has no digit and returns `None`.
#[inline]
pub fn letter_digit(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        let idx = (c.to_ascii_lowercase() as u8 - b'a') as usize;
        Some(LETTER_DIGITS[idx])
    } else {
        None
    }
}

/// Appends the digit-code of `word` to `out`.
///
/// Characters without a digit are skipped; the word itself is not modified.
pub fn digit_code_into(word: &str, out: &mut Vec<u8>) {
    out.extend(word.chars().filter_map(letter_digit));
}

/// Computes the digit-code of a dictionary word.
pub fn digit_code(word: &str) -> Vec<u8> {
    let mut code = Vec::with_capacity(word.len());
    digit_code_into(word, &mut code);
    code
}

/// Renders a digit-code as a string of ASCII digits (`[4, 8, 2]` -> `"482"`).
pub fn code_to_string(code: &[u8]) -> String {
    code.iter().map(|&d| char::from(b'0' + d)).collect()
}
