//! Interactive selection of the start and goal cells.

use std::fmt;
use std::io::{self, BufRead, Write};

use gridroute_core::{CellState, Coord, Grid};
use log::warn;

/// Why a coordinate was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidCoordinate {
    /// Not two integers.
    Malformed(String),
    OutOfBounds(Coord),
    NotEmpty { at: Coord, state: CellState },
    SameAsStart(Coord),
}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(s) => {
                write!(f, "expected \u{201c}row col\u{201d}, got \u{201c}{s}\u{201d}")
            }
            Self::OutOfBounds(c) => write!(f, "{c} is not on the grid"),
            Self::NotEmpty { at, state } => write!(f, "{at} is {state}, pick an empty cell"),
            Self::SameAsStart(c) => write!(f, "{c} is already the start"),
        }
    }
}

impl std::error::Error for InvalidCoordinate {}

/// Parse `"row col"` or `"row,col"`.
pub fn parse_coord(s: &str) -> Result<Coord, InvalidCoordinate> {
    let malformed = || InvalidCoordinate::Malformed(s.trim().to_string());
    let mut parts = s
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next().ok_or_else(malformed)?;
    let col = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }
    let row = row.parse::<i32>().map_err(|_| malformed())?;
    let col = col.parse::<i32>().map_err(|_| malformed())?;
    Ok(Coord::new(row, col))
}

/// Check that `c` is on the grid and `Empty`.
pub fn validate(grid: &Grid, c: Coord) -> Result<Coord, InvalidCoordinate> {
    match grid.at(c) {
        None => Err(InvalidCoordinate::OutOfBounds(c)),
        Some(CellState::Empty) => Ok(c),
        Some(CellState::Chosen) => Err(InvalidCoordinate::SameAsStart(c)),
        Some(state) => Err(InvalidCoordinate::NotEmpty { at: c, state }),
    }
}

/// Validate a start/goal pair given up front, e.g. on the command line.
pub fn validate_pair(
    grid: &Grid,
    start: Coord,
    goal: Coord,
) -> Result<(Coord, Coord), InvalidCoordinate> {
    validate(grid, start)?;
    validate(grid, goal)?;
    if start == goal {
        return Err(InvalidCoordinate::SameAsStart(goal));
    }
    Ok((start, goal))
}

/// Prompts an operator for start and goal until both are acceptable.
pub struct CoordinateInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CoordinateInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Ask for start and goal.
    ///
    /// While the goal is being entered the start cell is reserved as
    /// `Chosen`; a rejected goal releases it and the whole question starts
    /// over. On success the reservation is released again so both cells are
    /// `Empty`. Returns `Ok(None)` if input ends first.
    pub fn prompt_endpoints(&mut self, grid: &mut Grid) -> io::Result<Option<(Coord, Coord)>> {
        self.print_rules(grid)?;
        loop {
            writeln!(
                self.writer,
                "Enter starting cell row and column values in grid separated by a space"
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let start = match parse_coord(&line).and_then(|c| validate(grid, c)) {
                Ok(c) => c,
                Err(e) => {
                    self.reject(&e)?;
                    continue;
                }
            };
            reserve(grid, start, CellState::Chosen)?;
            let line = self.ask_goal();
            reserve(grid, start, CellState::Empty)?;
            let Some(line) = line? else {
                return Ok(None);
            };
            let goal = parse_coord(&line).and_then(|c| {
                if c == start {
                    Err(InvalidCoordinate::SameAsStart(c))
                } else {
                    validate(grid, c)
                }
            });
            match goal {
                Ok(goal) => return Ok(Some((start, goal))),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    fn print_rules(&mut self, grid: &Grid) -> io::Result<()> {
        let rule = "=".repeat(72);
        let w = &mut self.writer;
        writeln!(w)?;
        writeln!(w, "Rules to choose your own starting and finishing cell positions in the grid")?;
        writeln!(w, "{rule}")?;
        writeln!(w, "1. Row and column index values start from 0")?;
        writeln!(
            w,
            "   Meaning top left cell position is \"0 0\" and bottom right cell position is \"{} {}\"",
            grid.rows() - 1,
            grid.cols() - 1
        )?;
        writeln!(w, "2. Chosen cell position must be on the grid")?;
        writeln!(w, "3. Only an empty cell can be chosen")?;
        writeln!(w, "4. Starting and finishing cell cannot be same")?;
        writeln!(w, "{rule}")?;
        writeln!(w)
    }

    fn ask_goal(&mut self) -> io::Result<Option<String>> {
        writeln!(
            self.writer,
            "Enter finishing cell row and column values in grid separated by a space"
        )?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject(&mut self, e: &InvalidCoordinate) -> io::Result<()> {
        warn!("input: {e}");
        writeln!(self.writer, "Invalid Input!! {e}")
    }
}

fn reserve(grid: &mut Grid, c: Coord, state: CellState) -> io::Result<()> {
    grid.transition(c, state)
        .map(|_| ())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
