//! Phone number encoding.
//!
//! Every phone number is encoded as all sequences of dictionary words (and,
//! where no word fits, single digits) whose letters map back to the number's
//! digits under a fixed letter-to-digit table.
//!
//! ```
//! use phonecode::PhoneEncoder;
//!
//! let encoder = PhoneEncoder::from_words(["mir", "Mix", "Tor"]);
//! let mut lines: Vec<String> = encoder.encode("5624-82").map(|e| e.to_string()).collect();
//! lines.sort();
//! assert_eq!(lines, ["5624-82: Mix Tor", "5624-82: mir Tor"]);
//! ```
//!
//! - [`encoder`] -- [`PhoneEncoder`] facade and [`EncodeOptions`]
//! - [`search`] -- Backtracking [`Matcher`](search::Matcher) and the lazy
//!   [`Encodings`](search::Encodings) iterator

pub mod encoder;
pub mod search;

pub use encoder::{EncodeOptions, EncoderError, PhoneEncoder};
pub use phonecode_core::enums::DigitPolicy;
pub use phonecode_core::token::{Encoding, Token};
pub use phonecode_index::WordIndex;
