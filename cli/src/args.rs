//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gridroute_core::Coord;
use gridroute_io::{GlyphSet, parse_coord};

/// Find a shortest route between two cells of an obstacle grid using A*.
#[derive(Debug, Parser)]
#[command(name = "gridroute", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a grid, pick start and goal, and search for a route.
    Solve(SolveArgs),
    /// Print a random grid file.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Grid file. Asked for on stdin (relative to --grid-dir) when omitted.
    pub grid: Option<PathBuf>,

    /// Folder that interactively entered grid names are looked up in.
    #[arg(long, default_value = "grid_files")]
    pub grid_dir: PathBuf,

    /// Start cell as ROW,COL. Prompted for when omitted.
    #[arg(long, value_parser = parse_coord, requires = "goal")]
    pub start: Option<Coord>,

    /// Goal cell as ROW,COL.
    #[arg(long, value_parser = parse_coord, requires = "start")]
    pub goal: Option<Coord>,

    #[arg(long, value_enum, default_value_t = Glyphs::Ascii)]
    pub glyphs: Glyphs,

    /// Colour the rendered grid.
    #[arg(long)]
    pub color: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    pub rows: i32,

    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    pub cols: i32,

    /// Probability of each cell being an obstacle.
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Seed for a reproducible grid.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Glyphs {
    Ascii,
    Emoji,
}

impl From<Glyphs> for GlyphSet {
    fn from(g: Glyphs) -> Self {
        match g {
            Glyphs::Ascii => GlyphSet::Ascii,
            Glyphs::Emoji => GlyphSet::Emoji,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
