//! **gridroute-core** — core types for the grid route planner.
//!
//! This crate provides the foundational types shared by the search engine
//! and its collaborators: coordinates and bounds, per-cell state with its
//! legal transitions, and the owned rectangular [`Grid`].

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use geom::{Bounds, Coord};
pub use grid::{Grid, GridError, TransitionError};
