//! Random obstacle grids.

use gridroute_core::{CellState, Grid};
use rand::Rng;

/// Generate a `rows × cols` grid where each cell is independently an
/// obstacle with probability `density` (clamped to `0.0..=1.0`).
pub fn random_grid(rows: i32, cols: i32, density: f64, rng: &mut impl Rng) -> Grid {
    let p = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    Grid::from_fn(rows, cols, |_| {
        if rng.random_bool(p) {
            CellState::Obstacle
        } else {
            CellState::Empty
        }
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn size_and_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = random_grid(4, 6, 0.0, &mut rng);
        assert_eq!(g.bounds().len(), 24);
        assert_eq!(g.count(CellState::Obstacle), 0);

        let g = random_grid(4, 6, 2.5, &mut rng);
        assert_eq!(g.count(CellState::Obstacle), 24);
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = random_grid(10, 10, 0.3, &mut StdRng::seed_from_u64(9));
        let b = random_grid(10, 10, 0.3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        let obstacles = a.count(CellState::Obstacle);
        assert!(obstacles > 0 && obstacles < 100);
    }
}
