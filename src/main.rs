mod cli;
mod error_handling;
mod generator;
mod grammar;
mod translator;

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;

fn read_pattern_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let pattern = match cli.pattern {
        Some(pattern) => pattern,
        None => match read_pattern_line() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Could not read pattern: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    let (alphabet, grammar) = match translator::translate(&pattern) {
        Ok(translated) => translated,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if !cli.quiet {
        println!("Alphabet: {}", alphabet.iter().join(" "));
    }
    println!("{}", grammar);

    for _ in 0..cli.samples.unwrap_or(0) {
        match generator::generate(&grammar) {
            Ok(sentence) => println!("{}", sentence),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    return ExitCode::SUCCESS;
}
