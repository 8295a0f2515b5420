use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use frontend::{
    display_error, format_listing,
    lexer::{lexer::Lexer, symbols::SymbolTable},
};
use log::info;

/// Print the token stream of an X source file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source file to scan
    file: PathBuf,

    /// Do not echo the numbered source after the tokens
    #[arg(long)]
    no_listing: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let lexer = match Lexer::open(&args.file, SymbolTable::seeded()) {
        Ok(lexer) => lexer,
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut failure = None;
    let mut count = 0;

    for result in lexer {
        match result {
            Ok(token) => {
                count += 1;
                println!("{}", token);
            }
            Err(error) => failure = Some(error),
        }
    }

    info!("Tokenized {} tokens in {:?}", count, start.elapsed());

    if let Some(error) = &failure {
        display_error(error, &args.file);
    }

    if !args.no_listing {
        match read_to_string(&args.file) {
            Ok(source) => {
                println!();
                print!("{}", format_listing(&source));
            }
            Err(error) => eprintln!("Error: could not echo {}: {}", args.file.display(), error),
        }
    }

    if failure.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
