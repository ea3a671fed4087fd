// Główny punkt wejścia dla narzędzi CLI
pub mod commands;
pub mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Narzędzia wiersza poleceń dla kodeka LZW.
#[derive(Parser, Debug)]
#[command(name = "lzw-cli", version, about = "Kompresja i dekompresja LZW")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Kompresuje plik do strumienia kodów LZW.
    Compress {
        /// Plik wejściowy (surowe bajty).
        input: PathBuf,
        /// Plik wyjściowy (strumień kodów).
        output: PathBuf,
    },
    /// Dekompresuje strumień kodów LZW do pliku.
    Decompress {
        /// Plik wejściowy (strumień kodów).
        input: PathBuf,
        /// Plik wyjściowy (surowe bajty).
        output: PathBuf,
    },
    /// Wypisuje kolejne kody strumienia wraz z ich znaczeniem.
    Dump {
        /// Plik ze strumieniem kodów.
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => commands::compress::run(&input, &output),
        Commands::Decompress { input, output } => commands::decompress::run(&input, &output),
        Commands::Dump { input } => commands::dump::run(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lzw-cli: {err}");
            ExitCode::FAILURE
        }
    }
}
