//! Find a shortest route through an obstacle grid.
//!
//! Run: cargo run -- solve grid_files/board.txt --start 0,0 --goal 4,5

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use gridroute_cli::args::Format;
use gridroute_cli::{Cli, CliError, Command, SolveConfig, run_generate, run_solve};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Solve(args) => {
            let config = SolveConfig::from(args);
            let stdin = io::stdin();
            let mut out = io::stdout();
            // Keep stdout clean for the report in JSON mode.
            let mut prompt: Box<dyn Write> = match config.format {
                Format::Text => Box::new(io::stdout()),
                Format::Json => Box::new(io::stderr()),
            };
            run_solve(&config, stdin.lock(), &mut out, &mut prompt).map(|_| ())
        }
        Command::Generate(args) => run_generate(&args, &mut io::stdout()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Load(e)) => {
            log::error!("{e}");
            eprintln!("Invalid file path or grid file ({e}). Terminating program!");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
