//! A* shortest-path search on obstacle grids.
//!
//! The search runs over a 4-connected [`Grid`](gridroute_core::Grid) with
//! unit step cost and the admissible [`manhattan`] heuristic:
//!
//! - [`Frontier`] is the open set, a binary heap keyed by `f = g + h`.
//!   Equal `f` pops the lower `g` first, then the earliest push.
//! - [`Neighbors`] enumerates the cardinal neighbours in the fixed order
//!   up, left, down, right.
//! - [`PathFinder::search`] consumes a grid and returns an [`Outcome`]: a
//!   [`Solution`] holding the marked grid, or [`Outcome::NoPath`].

mod astar;
mod distance;
mod frontier;
mod neighbors;

pub use astar::{Endpoint, Outcome, PathFinder, SearchError, Solution, search};
pub use distance::manhattan;
pub use frontier::{Frontier, SearchNode};
pub use neighbors::Neighbors;
