use std::process::ExitCode;

use clap::Parser;
use tablegen::cli::{generate, Cli};

fn main() -> ExitCode {
    let args = Cli::parse();

    match generate(args.command, args.lang.into()) {
        Ok(code) => {
            print!("{code}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}
