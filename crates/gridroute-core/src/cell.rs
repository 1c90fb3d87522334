//! The [`CellState`] type and its legal transitions.

use std::fmt;

/// State of a single grid cell.
///
/// A cell starts as [`Empty`](CellState::Empty) or
/// [`Obstacle`](CellState::Obstacle). The search claims cells
/// (`Empty → Visited`), expands them (`Visited → Path`) and, on success,
/// marks the endpoints (`→ Start`, `→ Finish`). `Chosen` is only used while
/// an operator is picking coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Obstacle,
    Visited,
    Path,
    Start,
    Finish,
    Chosen,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Obstacle,
        CellState::Visited,
        CellState::Path,
        CellState::Start,
        CellState::Finish,
        CellState::Chosen,
    ];

    /// Whether a cell in this state may move to `next`.
    pub const fn can_become(self, next: CellState) -> bool {
        use CellState::*;
        matches!(
            (self, next),
            (Empty, Visited)
                | (Visited, Path)
                | (Visited, Start)
                | (Path, Start)
                | (Visited, Finish)
                | (Empty, Chosen)
                | (Chosen, Empty)
        )
    }

    /// Everything but obstacles can be walked on.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellState::Obstacle)
    }

    /// Lower-case name, used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            CellState::Empty => "empty",
            CellState::Obstacle => "obstacle",
            CellState::Visited => "visited",
            CellState::Path => "path",
            CellState::Start => "start",
            CellState::Finish => "finish",
            CellState::Chosen => "chosen",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
