use std::fmt;

use gridroute_core::{Bounds, CellState, Coord, Grid, TransitionError};
use log::{debug, trace};

use crate::distance::manhattan;
use crate::frontier::{Frontier, SearchNode};
use crate::neighbors::Neighbors;

/// Which endpoint of a search a precondition failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// A search that could not run because its inputs were rejected.
///
/// A search that runs and exhausts the frontier is not an error; it yields
/// [`Outcome::NoPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    OutOfBounds {
        endpoint: Endpoint,
        at: Coord,
    },
    NotEmpty {
        endpoint: Endpoint,
        at: Coord,
        state: CellState,
    },
    SameEndpoints(Coord),
    /// The grid refused a state change while searching.
    Transition(TransitionError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { endpoint, at } => write!(f, "{endpoint} {at} is outside the grid"),
            Self::NotEmpty {
                endpoint,
                at,
                state,
            } => write!(f, "{endpoint} {at} is {state}, expected empty"),
            Self::SameEndpoints(c) => write!(f, "start and goal are both {c}"),
            Self::Transition(e) => write!(f, "search invariant violated: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransitionError> for SearchError {
    fn from(e: TransitionError) -> Self {
        Self::Transition(e)
    }
}

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    grid: Grid,
    cost: u32,
    trace: Vec<SearchNode>,
    route: Vec<Coord>,
}

impl Solution {
    /// The terminal grid: every expanded cell is `Path`, cells still on the
    /// frontier are `Visited`, the endpoints are `Start` and `Finish`.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Number of unit steps from start to goal.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Nodes in the order they were taken off the frontier, goal last.
    pub fn trace(&self) -> &[SearchNode] {
        &self.trace
    }

    /// Number of cells expanded before the goal was reached.
    pub fn expanded(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    /// One shortest route, start and goal included.
    pub fn route(&self) -> &[Coord] {
        &self.route
    }
}

/// Result of a search that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Found(Solution),
    /// The frontier ran dry after expanding this many cells.
    NoPath { expanded: usize },
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Found(s) => Some(s),
            Self::NoPath { .. } => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Self::Found(s) => Some(s),
            Self::NoPath { .. } => None,
        }
    }
}

/// A* search over a 4-connected grid with unit step cost and the Manhattan
/// heuristic.
///
/// A `PathFinder` keeps its frontier and scratch buffers between calls so
/// that repeated searches reuse their allocations. Every search starts from
/// a cleared state.
#[derive(Default)]
pub struct PathFinder {
    frontier: Frontier,
    neighbors: Neighbors,
    parents: Vec<Option<Coord>>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for a shortest path from `start` to `goal`.
    ///
    /// The grid is consumed as the search workspace and handed back inside
    /// the [`Solution`]. Both endpoints must be in bounds, distinct and
    /// `Empty`.
    pub fn search(
        &mut self,
        mut grid: Grid,
        start: Coord,
        goal: Coord,
    ) -> Result<Outcome, SearchError> {
        check_endpoints(&grid, start, goal)?;

        let bounds = grid.bounds();
        self.frontier.clear();
        self.parents.clear();
        self.parents.resize(bounds.len(), None);
        let mut dequeued: Vec<SearchNode> = Vec::new();

        debug!("astar: {start} -> {goal} on {bounds} grid");

        grid.transition(start, CellState::Visited)?;
        self.frontier.push(SearchNode {
            coord: start,
            g: 0,
            h: manhattan(start, goal),
        });

        while let Some(current) = self.frontier.pop() {
            dequeued.push(current);

            if current.coord == goal {
                grid.transition(start, CellState::Start)?;
                grid.transition(goal, CellState::Finish)?;
                let route = self.route(bounds, goal);
                debug!(
                    "astar: reached {goal} at cost {} after {} expansions",
                    current.g,
                    dequeued.len() - 1
                );
                return Ok(Outcome::Found(Solution {
                    grid,
                    cost: current.g,
                    trace: dequeued,
                    route,
                }));
            }

            grid.transition(current.coord, CellState::Path)?;
            trace!(
                "astar: expand {} g={} h={}",
                current.coord,
                current.g,
                current.h
            );

            let open = self
                .neighbors
                .cardinal(current.coord, |n| grid.at(n) == Some(CellState::Empty));
            for &n in open {
                let Some(ni) = bounds.index(n) else {
                    continue;
                };
                grid.transition(n, CellState::Visited)?;
                self.parents[ni] = Some(current.coord);
                self.frontier.push(SearchNode {
                    coord: n,
                    g: current.g + 1,
                    h: manhattan(n, goal),
                });
            }
        }

        debug!(
            "astar: no path {start} -> {goal} after {} expansions",
            dequeued.len()
        );
        Ok(Outcome::NoPath {
            expanded: dequeued.len(),
        })
    }

    fn route(&self, bounds: Bounds, goal: Coord) -> Vec<Coord> {
        let mut route = vec![goal];
        let mut c = goal;
        while let Some(p) = bounds.index(c).and_then(|i| self.parents[i]) {
            route.push(p);
            c = p;
        }
        route.reverse();
        route
    }
}

/// Run a single search with a fresh [`PathFinder`].
pub fn search(grid: Grid, start: Coord, goal: Coord) -> Result<Outcome, SearchError> {
    PathFinder::new().search(grid, start, goal)
}

fn check_endpoints(grid: &Grid, start: Coord, goal: Coord) -> Result<(), SearchError> {
    for (endpoint, at) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.contains(at) {
            return Err(SearchError::OutOfBounds { endpoint, at });
        }
    }
    if start == goal {
        return Err(SearchError::SameEndpoints(start));
    }
    for (endpoint, at) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        match grid.at(at) {
            Some(CellState::Empty) => {}
            Some(state) => return Err(SearchError::NotEmpty { endpoint, at, state }),
            None => return Err(SearchError::OutOfBounds { endpoint, at }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use CellState::*;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| if v == 0 { Empty } else { Obstacle }).collect())
                .collect(),
        )
        .unwrap()
    }

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn bfs(g: &Grid, from: Coord) -> HashMap<Coord, u32> {
        let mut dist = HashMap::from([(from, 0)]);
        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            let d = dist[&p];
            for n in p.neighbors_4() {
                if g.at(n).is_some_and(CellState::is_passable) && !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    #[test]
    fn ring_around_centre_obstacle() {
        let g = grid(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        let sol = search(g, c(0, 0), c(2, 2)).unwrap().into_solution().unwrap();
        assert_eq!(sol.cost(), 4);

        let out = sol.grid();
        assert_eq!(out.row(0), Some(&[Start, Path, Path][..]));
        assert_eq!(out.row(1), Some(&[Path, Obstacle, Path][..]));
        assert_eq!(out.row(2), Some(&[Path, Path, Finish][..]));
        assert_eq!(sol.expanded(), 7);
        assert_eq!(
            sol.route(),
            &[c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2)]
        );
    }

    #[test]
    fn wall_blocks_every_route() {
        let g = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let out = search(g, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(out, Outcome::NoPath { expanded: 3 });
        assert!(!out.is_found());
    }

    #[test]
    fn open_grid_succeeds() {
        for (rows, cols) in [(1, 2), (2, 1), (4, 7), (10, 10)] {
            let g = Grid::new(rows, cols);
            let goal = c(rows - 1, cols - 1);
            let sol = search(g, c(0, 0), goal).unwrap().into_solution().unwrap();
            assert_eq!(sol.grid().at(c(0, 0)), Some(Start));
            assert_eq!(sol.grid().at(goal), Some(Finish));
            assert_eq!(sol.cost(), (rows - 1 + cols - 1) as u32);
        }
    }

    #[test]
    fn straight_corridor_expands_only_the_corridor() {
        let g = Grid::new(1, 5);
        let sol = search(g, c(0, 0), c(0, 4)).unwrap().into_solution().unwrap();
        assert_eq!(sol.expanded(), 4);
        assert_eq!(sol.grid().count(Path), 3);
        assert_eq!(sol.route().len(), 5);
    }

    #[test]
    fn rejects_bad_endpoints() {
        let g = grid(&[&[0, 1], &[0, 0]]);
        assert_eq!(
            search(g.clone(), c(0, 0), c(0, 0)),
            Err(SearchError::SameEndpoints(c(0, 0)))
        );
        assert_eq!(
            search(g.clone(), c(0, 0), c(2, 0)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                at: c(2, 0)
            })
        );
        assert_eq!(
            search(g.clone(), c(0, 1), c(1, 1)),
            Err(SearchError::NotEmpty {
                endpoint: Endpoint::Start,
                at: c(0, 1),
                state: Obstacle
            })
        );
    }

    #[test]
    fn single_cell_grid_is_rejected() {
        let g = Grid::new(1, 1);
        assert_eq!(
            search(g, c(0, 0), c(0, 0)),
            Err(SearchError::SameEndpoints(c(0, 0)))
        );
    }

    #[test]
    fn deterministic_on_copies() {
        let g = grid(&[
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 1, 0],
            &[1, 1, 0, 0, 0],
        ]);
        let a = search(g.clone(), c(0, 0), c(2, 2)).unwrap();
        let b = search(g, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reused_pathfinder_matches_fresh() {
        let g = grid(&[&[0, 0, 0], &[1, 1, 0], &[0, 0, 0]]);
        let mut pf = PathFinder::new();
        let first = pf.search(g.clone(), c(0, 0), c(2, 0)).unwrap();
        let blocked = grid(&[&[0, 1, 0], &[0, 1, 0]]);
        assert!(!pf.search(blocked, c(0, 0), c(0, 2)).unwrap().is_found());
        let again = pf.search(g.clone(), c(0, 0), c(2, 0)).unwrap();
        assert_eq!(first, again);
        assert_eq!(again, search(g, c(0, 0), c(2, 0)).unwrap());
    }

    #[test]
    fn obstacles_untouched_and_no_empty_next_to_expanded() {
        let g = grid(&[
            &[0, 0, 1, 0, 0, 0],
            &[0, 1, 1, 0, 1, 0],
            &[0, 0, 0, 0, 1, 0],
            &[1, 0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0, 0],
        ]);
        let obstacles = g.count(Obstacle);
        let sol = search(g, c(0, 0), c(0, 5)).unwrap().into_solution().unwrap();
        let out = sol.grid();
        assert_eq!(out.count(Obstacle), obstacles);
        for (p, s) in out.iter() {
            if matches!(s, Path | Start) {
                for n in p.neighbors_4() {
                    assert_ne!(out.at(n), Some(Empty), "{n} next to expanded {p}");
                }
            }
        }
    }

    #[test]
    fn trace_priorities_never_decrease() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let rows = rng.random_range(2..12);
            let cols = rng.random_range(2..12);
            let g = Grid::from_fn(rows, cols, |_| {
                if rng.random_bool(0.3) { Obstacle } else { Empty }
            });
            let free: Vec<Coord> = g.iter().filter(|&(_, s)| s == Empty).map(|(p, _)| p).collect();
            if free.len() < 2 {
                continue;
            }
            let start = free[0];
            let goal = free[free.len() - 1];
            if let Outcome::Found(sol) = search(g, start, goal).unwrap() {
                for w in sol.trace().windows(2) {
                    assert!(w[0].f() <= w[1].f(), "{:?} then {:?}", w[0], w[1]);
                }
            }
        }
    }

    #[test]
    fn cost_matches_breadth_first_distance() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let rows = rng.random_range(1..14);
            let cols = rng.random_range(1..14);
            let density = rng.random_range(0.0..0.5);
            let g = Grid::from_fn(rows, cols, |_| {
                if rng.random_bool(density) { Obstacle } else { Empty }
            });
            let free: Vec<Coord> = g.iter().filter(|&(_, s)| s == Empty).map(|(p, _)| p).collect();
            if free.len() < 2 {
                continue;
            }
            let start = free[rng.random_range(0..free.len())];
            let goal = free[rng.random_range(0..free.len())];
            if start == goal {
                continue;
            }
            let dist = bfs(&g, start);
            match search(g, start, goal).unwrap() {
                Outcome::Found(sol) => {
                    assert_eq!(Some(&sol.cost()), dist.get(&goal));
                    for n in sol.trace() {
                        assert_eq!(Some(&n.g), dist.get(&n.coord), "g at {}", n.coord);
                    }
                    let route = sol.route();
                    assert_eq!(route.len() as u32, sol.cost() + 1);
                    assert_eq!(route.first(), Some(&start));
                    assert_eq!(route.last(), Some(&goal));
                    for w in route.windows(2) {
                        assert_eq!(manhattan(w[0], w[1]), 1);
                    }
                }
                Outcome::NoPath { .. } => assert!(!dist.contains_key(&goal)),
            }
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let out = search(Grid::new(2, 3), Coord::new(0, 0), Coord::new(1, 2)).unwrap();
        let json = serde_json::to_string(&out).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(out, back);
    }
}
