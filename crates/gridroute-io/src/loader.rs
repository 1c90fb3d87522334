//! Grid files: one row per line, comma-separated integers, `0` passable and
//! anything else an obstacle.
//!
//! ```text
//! 0,1,0,0,0,0,
//! 0,1,0,0,0,0,
//! 0,0,1,0,1,0,
//! ```
//!
//! Loading is all-or-nothing: any malformed line rejects the whole file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gridroute_core::{CellState, Grid, GridError};
use log::debug;

/// Errors that can occur when loading a grid.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The source holds no rows.
    Empty,
    /// A line has no cells (1-based line number).
    BlankLine(usize),
    /// A token is not a non-negative integer.
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
    /// A line has a different number of cells than the first.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Empty => write!(f, "grid source is empty"),
            Self::BlankLine(line) => write!(f, "line {line}: no cells"),
            Self::InvalidToken {
                line,
                column,
                token,
            } => write!(
                f,
                "line {line}, cell {column}: \u{201c}{token}\u{201d} is not a non-negative integer"
            ),
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(f, "line {line}: {found} cells, expected {expected}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::NoRows => Self::Empty,
            GridError::EmptyRow(r) => Self::BlankLine(r + 1),
            GridError::Ragged {
                row,
                expected,
                found,
            } => Self::Ragged {
                line: row + 1,
                expected,
                found,
            },
        }
    }
}

fn parse_line(line: &str, number: usize) -> Result<Vec<CellState>, LoadError> {
    let body = line.trim();
    let body = body.strip_suffix(',').unwrap_or(body);
    if body.trim().is_empty() {
        return Err(LoadError::BlankLine(number));
    }
    body.split(',')
        .enumerate()
        .map(|(i, tok)| {
            let tok = tok.trim();
            match tok.parse::<u32>() {
                Ok(0) => Ok(CellState::Empty),
                Ok(_) => Ok(CellState::Obstacle),
                Err(_) => Err(LoadError::InvalidToken {
                    line: number,
                    column: i + 1,
                    token: tok.to_string(),
                }),
            }
        })
        .collect()
}

/// Parse grid text into a rectangular grid of `Empty`/`Obstacle` cells.
///
/// Trailing blank lines are ignored; the trailing comma on each row is
/// optional.
pub fn parse_grid(text: &str) -> Result<Grid, LoadError> {
    let rows = text
        .trim_end()
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    let grid = Grid::from_rows(rows)?;
    debug!("loader: parsed {} grid", grid.bounds());
    Ok(grid)
}

/// Read and parse a grid file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_grid(&text)
}

/// Write a grid back in file form. `Empty` cells become `0`, every other
/// state `1`.
pub fn to_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.bounds().len() * 2 + grid.rows() as usize);
    for row in grid.rows_iter() {
        for &cell in row {
            out.push(if cell == CellState::Empty { '0' } else { '1' });
            out.push(',');
        }
        out.push('\n');
    }
    out
}
