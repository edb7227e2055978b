//! Command-line driver: reads a solution file and prints the verdict.

use std::{
    fs::File,
    io::{self, BufRead as _, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use quadrille_validator::check;

/// Check an N×N generalized sudoku solution.
///
/// The solution file holds one comma-separated row per line, for example:
///
///     1,4,2,3
///     2,3,1,4
///     4,2,3,1
///     3,1,4,2
#[derive(Debug, Parser)]
#[command(version, about, verbatim_doc_comment)]
struct Cli {
    /// Path of the solution file.
    file: PathBuf,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    log::info!("reading file: {}", cli.file.display());
    let rows = match read_rows(&cli.file) {
        Ok(rows) => rows,
        Err(error) => {
            eprintln!("cannot read {}: {error}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    let verdict = check(rows);
    for message in verdict.diagnostics() {
        println!("{message}");
    }
    println!("result is {}", verdict.is_valid());
    if verdict.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_rows(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}
