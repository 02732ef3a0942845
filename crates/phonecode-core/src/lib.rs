//! Shared types for encoding phone numbers as dictionary words.
//!
//! - [`digit_map`] -- Fixed letter-to-digit table and word digit-codes
//! - [`phone`] -- Digit subsequence of a phone number
//! - [`token`] -- [`Token`](token::Token) and [`Encoding`](token::Encoding)
//! - [`enums`] -- [`DigitPolicy`](enums::DigitPolicy) and input limits

pub mod digit_map;
pub mod enums;
pub mod phone;
pub mod token;
