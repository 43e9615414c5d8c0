use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bit_strings::introductory;
use bit_strings::modular::Strategy;
use clap::{Parser, Subcommand};
use log::error;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "bit_strings")]
#[command(about = "Counts bit strings of length n, modulo 10^9 + 7", long_about = None)]
struct Cli {
    /// Algorithm used for 2^n mod 10^9 + 7
    #[arg(long, global = true, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bundled data-file test cases
    Verify,
    /// Introductory Problems
    Introductory {
        /// Problem name to run
        problem: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the answer, so logs go to stderr.
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let result = run(cli, io::stdin().lock(), &mut io::stdout().lock());
    ExitCode::from(status(result))
}

/// Returns Ok(false) when verification ran but some case failed.
fn run<W: Write>(cli: Cli, input: impl BufRead + 'static, output: &mut W) -> io::Result<bool> {
    let tasks = introductory::tasks().with_strategy(cli.strategy);
    match cli.command {
        None => tasks.run("bit_strings", input, output).map(|_| true),
        Some(Commands::Verify) => tasks.verify("bit_strings"),
        Some(Commands::Introductory { problem }) => {
            tasks.run(&problem, input, output).map(|_| true)
        }
    }
}

fn status(result: io::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            error!("{}", err);
            1
        }
    }
}
