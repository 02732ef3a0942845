// phonecode-cli: dictionary loading and streaming output for the CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use phonecode::PhoneEncoder;
use phonecode::search::SearchConfig;
use phonecode_core::enums::{MAX_DICTIONARY_WORDS, MAX_PHONE_CHARS, MAX_WORD_CHARS};
use phonecode_index::format::is_snapshot;
use phonecode_index::{WordIndex, WordIndexBuilder};
use tracing::Level;

/// Load a dictionary from `path`.
///
/// A file that starts with the snapshot cookies is decoded as a binary index
/// (see `phonecode compile`); anything else is read as a word list with one
/// word per line.
pub fn load_index(path: &Path) -> Result<WordIndex> {
    let started = Instant::now();
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let index = if is_snapshot(&data) {
        WordIndex::from_bytes(&data)
            .with_context(|| format!("invalid index snapshot {}", path.display()))?
    } else {
        let mut builder = WordIndexBuilder::new();
        for word in read_words(data.as_slice()) {
            let word = word.with_context(|| format!("failed to read {}", path.display()))?;
            if word.chars().count() > MAX_WORD_CHARS {
                tracing::debug!(word = %word, "dictionary word longer than {MAX_WORD_CHARS} characters");
            }
            builder.insert(&word);
        }
        if builder.word_count() > MAX_DICTIONARY_WORDS {
            tracing::warn!(
                words = builder.word_count(),
                "dictionary has more than {MAX_DICTIONARY_WORDS} words"
            );
        }
        if builder.skipped_count() > 0 {
            tracing::info!(
                skipped = builder.skipped_count(),
                "ignored dictionary entries without letters"
            );
        }
        builder.build()
    };

    tracing::info!(
        path = %path.display(),
        words = index.word_count(),
        nodes = index.node_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded dictionary"
    );
    Ok(index)
}

/// Trimmed, non-empty lines of a word list.
pub fn read_words<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    trimmed_lines(reader)
}

/// Phone numbers from `reader`, one per line.
///
/// Lines are read on demand, so arbitrarily long inputs are never held in
/// memory. Surrounding whitespace is trimmed and empty lines are skipped.
pub fn phone_numbers<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    trimmed_lines(reader)
}

fn trimmed_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.len() == line.len() {
                Some(Ok(line))
            } else {
                Some(Ok(trimmed.to_string()))
            }
        }
        Err(e) => Some(Err(e)),
    })
}

/// Open `path` for reading, or stdin when `path` is `None` or `-`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Totals reported by [`write_encodings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Phone numbers read.
    pub numbers: usize,
    /// Phone numbers with at least one encoding.
    pub encoded: usize,
    /// Output lines written.
    pub lines: usize,
}

/// Write every encoding of every phone number in `phones` to `out`.
///
/// Each encoding is one `<phone>: <tokens>` line. All lines of a number are
/// written before the next number is read.
pub fn write_encodings<I, W>(encoder: &PhoneEncoder, phones: I, out: &mut W) -> Result<EncodeStats>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut stats = EncodeStats::default();
    let mut config = SearchConfig::with_capacity(MAX_PHONE_CHARS);

    for phone in phones {
        let phone = phone.context("failed to read phone numbers")?;
        if phone.len() > MAX_PHONE_CHARS {
            tracing::debug!(phone = %phone, "phone number longer than {MAX_PHONE_CHARS} characters");
        }

        let mut written: io::Result<()> = Ok(());
        let count = encoder.for_each_encoding_with(&mut config, &phone, |encoding| {
            if written.is_ok() {
                written = writeln!(out, "{encoding}");
            }
        });
        written.context("failed to write output")?;

        stats.numbers += 1;
        stats.lines += count;
        if count > 0 {
            stats.encoded += 1;
        }
    }

    out.flush().context("failed to write output")?;
    Ok(stats)
}

/// Read a whole dictionary file into a snapshot and write it to `output`.
pub fn compile_index(dictionary: &Path, output: &Path) -> Result<usize> {
    let index = load_index(dictionary)?;
    let bytes = index.to_bytes();
    std::fs::write(output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(
        path = %output.display(),
        bytes = bytes.len(),
        "wrote index snapshot"
    );
    Ok(bytes.len())
}

/// Install the stderr log subscriber. `INFO` by default, `DEBUG` when
/// `verbose` is set.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
