// phonecode: Encode phone numbers as dictionary words.
//
// Reads phone numbers (one per line) and prints every encoding of each
// number, one per line:
//   5624-82: mir Tor
//   5624-82: Mix Tor
//
// Usage:
//   phonecode encode <DICTIONARY> [INPUT] [--policy prefix-match|completion] [-v]
//   phonecode compile <DICTIONARY> <OUTPUT> [-v]
//
// DICTIONARY is a word list (one word per line) or a snapshot written by
// `phonecode compile`. Logs go to stderr.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use phonecode::{DigitPolicy, EncodeOptions, PhoneEncoder};

#[derive(Parser, Debug)]
#[command(name = "phonecode", version, about = "Encode phone numbers as dictionary words")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every encoding of each phone number
    Encode(EncodeArgs),

    /// Write a binary index snapshot of a word list
    Compile(CompileArgs),
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Word list or index snapshot
    dictionary: PathBuf,

    /// Phone numbers, one per line. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// When a digit may replace a word: `prefix-match` or `completion`
    #[arg(long, default_value_t = DigitPolicy::PrefixMatch)]
    policy: DigitPolicy,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct CompileArgs {
    /// Word list, one word per line
    dictionary: PathBuf,

    /// Snapshot file to write
    output: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn encode(args: EncodeArgs) -> Result<()> {
    let index = phonecode_cli::load_index(&args.dictionary)?;
    let encoder = PhoneEncoder::with_options(
        index,
        EncodeOptions {
            digit_policy: args.policy,
        },
    );

    let input = phonecode_cli::open_input(args.input.as_deref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let started = Instant::now();
    let stats =
        phonecode_cli::write_encodings(&encoder, phonecode_cli::phone_numbers(input), &mut out)?;
    tracing::info!(
        numbers = stats.numbers,
        encoded = stats.encoded,
        lines = stats.lines,
        policy = %args.policy,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}

fn compile(args: CompileArgs) -> Result<()> {
    phonecode_cli::compile_index(&args.dictionary, &args.output)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Command::Encode(args) => args.verbose,
        Command::Compile(args) => args.verbose,
    };
    phonecode_cli::init_logging(verbose);

    let result = match cli.command {
        Command::Encode(args) => encode(args),
        Command::Compile(args) => compile(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
