//! The [`Grid`] type — an owned, rectangular matrix of [`CellState`]s.
//!
//! Unlike a shared-buffer view, a `Grid` owns its cells outright. Cloning
//! produces an independent copy, so concurrent searches over the same map
//! each work on their own clone.

use std::fmt;

use crate::cell::CellState;
use crate::geom::{Bounds, Coord};

/// A rectangular `rows × cols` grid of cell states in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with every cell [`Empty`](CellState::Empty).
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: vec![CellState::Empty; bounds.len()],
        }
    }

    /// Create a grid by evaluating `f` at each coordinate in row-major order.
    pub fn from_fn(rows: i32, cols: i32, f: impl FnMut(Coord) -> CellState) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: bounds.iter().map(f).collect(),
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Every row must be non-empty and of the same length as the first.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::NoRows);
        };
        let width = first.len();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(GridError::EmptyRow(i));
            }
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            bounds: Bounds::new(rows.len() as i32, width as i32),
            cells,
        })
    }

    /// The extent of this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether the grid contains the given coordinate.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// Get the state at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// One row of cells, or `None` if `r` is out of bounds.
    pub fn row(&self, r: i32) -> Option<&[CellState]> {
        if r < 0 || r >= self.bounds.rows {
            return None;
        }
        let w = self.bounds.cols as usize;
        let start = r as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.bounds.cols.max(1) as usize)
    }

    /// Iterate over `(Coord, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Count how many cells are in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Move the cell at `c` to `next`, returning its previous state.
    ///
    /// This is the only way to mutate a grid after construction. The move
    /// must be allowed by [`CellState::can_become`].
    pub fn transition(&mut self, c: Coord, next: CellState) -> Result<CellState, TransitionError> {
        let Some(i) = self.bounds.index(c) else {
            return Err(TransitionError::OutOfBounds(c));
        };
        let prev = self.cells[i];
        if !prev.can_become(next) {
            return Err(TransitionError::Illegal {
                at: c,
                from: prev,
                to: next,
            });
        }
        self.cells[i] = next;
        Ok(prev)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Grid")]
        struct Raw {
            bounds: Bounds,
            cells: Vec<CellState>,
        }

        let Raw { bounds, cells } = Raw::deserialize(deserializer)?;
        if bounds.rows < 0 || bounds.cols < 0 || cells.len() != bounds.len() {
            return Err(serde::de::Error::custom(format_args!(
                "grid bounds {bounds} do not match {} cells",
                cells.len()
            )));
        }
        Ok(Self { bounds, cells })
    }
}

/// Errors that can occur when building a grid from rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows at all.
    NoRows,
    /// Row at this 0-based index has no cells.
    EmptyRow(usize),
    /// Row length differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "grid has no rows"),
            Self::EmptyRow(r) => write!(f, "grid row {r} is empty"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "grid row {row} has {found} cells, expected {expected}"),
        }
    }
}

impl std::error::Error for GridError {}

/// A refused call to [`Grid::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    OutOfBounds(Coord),
    Illegal {
        at: Coord,
        from: CellState,
        to: CellState,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "cell {c} is outside the grid"),
            Self::Illegal { at, from, to } => {
                write!(f, "cell {at} cannot go from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for TransitionError {}
