//! The `solve` and `generate` commands.

use std::io::{BufRead, Write};

use gridroute_core::{Coord, Grid};
use gridroute_io::{CoordinateInput, load_grid, random_grid, to_text, validate_pair};
use gridroute_paths::{Outcome, search};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::args::{Format, GenerateArgs};
use crate::config::{GridSource, SolveConfig};
use crate::error::CliError;

/// How a `solve` run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Solved,
    NoPath,
}

#[derive(Serialize)]
struct Report<'a> {
    found: bool,
    start: Coord,
    goal: Coord,
    cost: Option<u32>,
    expanded: usize,
    route: &'a [Coord],
    grid: Option<&'a Grid>,
}

/// Run `solve`.
///
/// The final result goes to `out`. Operator-facing text (the grid preview
/// and any questions) goes to `prompt`, answers are read from `input`.
pub fn run_solve<R: BufRead, W: Write, P: Write>(
    config: &SolveConfig,
    mut input: R,
    out: &mut W,
    prompt: &mut P,
) -> Result<Status, CliError> {
    let mut grid = match &config.source {
        GridSource::File(path) => load_grid(path)?,
        GridSource::Prompt { dir } => {
            writeln!(
                prompt,
                "Choose a grid file from the {} folder and enter its name below",
                dir.display()
            )?;
            prompt.flush()?;
            let mut name = String::new();
            if input.read_line(&mut name)? == 0 {
                return Err(CliError::InputClosed);
            }
            load_grid(dir.join(name.trim()))?
        }
    };
    info!("solve: loaded {} grid", grid.bounds());

    writeln!(prompt, "Valid grid board! Printing the grid")?;
    write!(prompt, "{}", config.renderer.render(&grid))?;

    let (start, goal) = match config.endpoints {
        Some((start, goal)) => validate_pair(&grid, start, goal)?,
        None => CoordinateInput::new(&mut input, &mut *prompt)
            .prompt_endpoints(&mut grid)?
            .ok_or(CliError::InputClosed)?,
    };
    info!("solve: {start} -> {goal}");

    let outcome = search(grid, start, goal)?;
    let status = if outcome.is_found() {
        Status::Solved
    } else {
        Status::NoPath
    };

    match config.format {
        Format::Text => match &outcome {
            Outcome::Found(sol) => {
                writeln!(out)?;
                writeln!(out, "Optimum path found. Printing solution grid")?;
                writeln!(out)?;
                write!(out, "{}", config.renderer.render(sol.grid()))?;
                writeln!(
                    out,
                    "Route length {} ({} cells expanded)",
                    sol.cost(),
                    sol.expanded()
                )?;
            }
            Outcome::NoPath { .. } => writeln!(out, "No path found")?,
        },
        Format::Json => {
            let report = match &outcome {
                Outcome::Found(sol) => Report {
                    found: true,
                    start,
                    goal,
                    cost: Some(sol.cost()),
                    expanded: sol.expanded(),
                    route: sol.route(),
                    grid: Some(sol.grid()),
                },
                Outcome::NoPath { expanded } => Report {
                    found: false,
                    start,
                    goal,
                    cost: None,
                    expanded: *expanded,
                    route: &[],
                    grid: None,
                },
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(status)
}

/// Run `generate`, writing a grid file to `out`.
pub fn run_generate<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<(), CliError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let grid = random_grid(args.rows, args.cols, args.density, &mut rng);
    info!("generate: {} grid, density {}", grid.bounds(), args.density);
    out.write_all(to_text(&grid).as_bytes())?;
    Ok(())
}
