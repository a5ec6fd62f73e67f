//! guess-charset CLI: report whether a file is ASCII, UTF-8 or probably Latin-1.

use anyhow::Result;
use clap::Parser;
use guess_charset::{classify_with, Acceptance, Classification};
use std::path::PathBuf;
use std::process;

mod input;
use input::{Input, Strategy};

#[derive(Debug, Parser)]
#[command(name = "guess-charset")]
#[command(about = "Guess whether a file is ASCII, UTF-8 or Latin-1", long_about = None)]
#[command(version)]
struct Cli {
    /// File to classify ("-" reads standard input)
    file: PathBuf,

    /// Read the whole file into memory instead of memory-mapping it
    #[arg(long)]
    read: bool,

    /// Reject overlong encodings, surrogates and code points above U+10FFFF
    #[arg(long)]
    strict: bool,

    /// Print input details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Exit codes for the command.
mod exit_codes {
    /// Classification printed (whatever the answer).
    pub const SUCCESS: i32 = 0;
    /// Usage error or I/O failure.
    pub const FAILURE: i32 = 1;
}

/// The line printed for each classification.
fn describe(classification: Classification) -> &'static str {
    match classification {
        Classification::Ascii => "ASCII",
        Classification::Utf8 => "UTF-8",
        Classification::Unknown => "Probably Latin-1",
    }
}

fn run(cli: Cli) -> Result<Classification> {
    let strategy = if cli.read {
        Strategy::Read
    } else {
        Strategy::Mmap
    };
    let acceptance = if cli.strict {
        Acceptance::Strict
    } else {
        Acceptance::Permissive
    };

    let input = Input::open(&cli.file, strategy)?;
    if cli.verbose {
        eprintln!(
            "{} {} bytes from {} ({:?} acceptance)",
            input.kind(),
            input.len(),
            cli.file.display(),
            acceptance
        );
    }

    Ok(classify_with(&input, acceptance))
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version print to stdout and succeed
            let code = if err.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::SUCCESS
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    match run(cli) {
        Ok(classification) => {
            println!("{}", describe(classification));
            process::exit(exit_codes::SUCCESS);
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(exit_codes::FAILURE);
        }
    }
}
