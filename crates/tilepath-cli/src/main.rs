//! Terminal front end for tilepath.
//!
//! Run: cargo run --bin tilepath -- --map map.txt

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tilepath_cli::{Cli, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();
    if !io::stdout().is_terminal() {
        cli.no_color = true;
    }

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    match run(&cli, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("session failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
