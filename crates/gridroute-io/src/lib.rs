//! Collaborators of the route planner: loading grid files, rendering grids
//! as text, asking an operator for coordinates and generating random grids.

pub mod input;
pub mod loader;
pub mod mapgen;
pub mod render;

pub use input::{CoordinateInput, InvalidCoordinate, parse_coord, validate, validate_pair};
pub use loader::{LoadError, load_grid, parse_grid, to_text};
pub use mapgen::random_grid;
pub use render::{GlyphSet, Renderer};
