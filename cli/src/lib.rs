//! gridroute: command-line front-end for the A* grid route planner.

pub mod args;
pub mod config;
pub mod error;
pub mod solve;

pub use args::{Cli, Command};
pub use config::{GridSource, SolveConfig};
pub use error::CliError;
pub use solve::{Status, run_generate, run_solve};
