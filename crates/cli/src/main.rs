mod cli;
mod cycle;
mod error;
mod fetch;
mod poll;
mod session;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Watch(args) => session::watch(args),
        Commands::Snapshot(args) => session::snapshot(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
