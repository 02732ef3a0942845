// Criterion benchmarks for phonecode.
//
// Uses the word list named by PHONECODE_DICT (one word per line) when set,
// otherwise a synthetic dictionary generated from a fixed seed so runs are
// comparable.
//
// Run:
//   cargo bench -p phonecode
//   PHONECODE_DICT=/path/to/dictionary.txt cargo bench -p phonecode

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use phonecode::encoder::dictionary_lines;
use phonecode::search::SearchConfig;
use phonecode::{DigitPolicy, PhoneEncoder, WordIndex};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\"";

/// xorshift64; good enough to spread words over the trie.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

fn synthetic_dictionary(words: usize) -> Vec<String> {
    let mut rng = Rng(0x5048_4E43_0001_7D1A);
    (0..words)
        .map(|_| {
            let len = 2 + rng.below(9);
            (0..len)
                .map(|_| LETTERS[rng.below(LETTERS.len())] as char)
                .collect()
        })
        .collect()
}

fn load_dictionary() -> Vec<String> {
    if let Ok(path) = std::env::var("PHONECODE_DICT") {
        match std::fs::read_to_string(&path) {
            Ok(text) => return dictionary_lines(&text).map(str::to_string).collect(),
            Err(e) => eprintln!("[encode_bench] cannot read {path}: {e}; using synthetic words"),
        }
    }
    synthetic_dictionary(50_000)
}

fn phone_numbers(count: usize) -> Vec<String> {
    let mut rng = Rng(0x0721_6084_0670_1556);
    (0..count)
        .map(|_| {
            let len = 3 + rng.below(16);
            let mut phone = String::with_capacity(len + 2);
            for i in 0..len {
                if i > 0 && rng.below(6) == 0 {
                    phone.push(if rng.below(2) == 0 { '-' } else { '/' });
                }
                phone.push(char::from(b'0' + rng.below(10) as u8));
            }
            phone
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_build_index(c: &mut Criterion) {
    let words = load_dictionary();
    let mut group = c.benchmark_group("build_index");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("from_words", |b| {
        b.iter(|| std::hint::black_box(WordIndex::from_words(&words)));
    });

    let bytes = WordIndex::from_words(&words).to_bytes();
    group.bench_function("from_bytes", |b| {
        b.iter(|| std::hint::black_box(WordIndex::from_bytes(&bytes).expect("snapshot")));
    });
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let words = load_dictionary();
    let phones = phone_numbers(1_000);

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(phones.len() as u64));
    for policy in [DigitPolicy::PrefixMatch, DigitPolicy::Completion] {
        let mut encoder = PhoneEncoder::from_words(&words);
        encoder.set_digit_policy(policy);

        group.bench_with_input(BenchmarkId::new("iterator", policy), &phones, |b, phones| {
            b.iter(|| {
                let mut total = 0usize;
                for phone in phones {
                    total += encoder.encode(phone).count();
                }
                std::hint::black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("callback", policy), &phones, |b, phones| {
            let mut config = SearchConfig::with_capacity(50);
            b.iter(|| {
                let mut total = 0usize;
                for phone in phones {
                    total += encoder.for_each_encoding_with(&mut config, phone, |e| {
                        std::hint::black_box(e);
                    });
                }
                std::hint::black_box(total)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_index, bench_encode);
criterion_main!(benches);
