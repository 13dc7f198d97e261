use ndarray::Array2;

use super::*;

/// Generation strategy that walls each non-special cell independently with a fixed probability;
/// the start, exit, and clue cells always come out open.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMazeGenerator {
    seed: u64,
}

impl RandomMazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MazeGenerator for RandomMazeGenerator {
    fn generate(self, config: &MazeConfig) -> MazeGrid {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let start = (0, 0);
        let exit = (rows.saturating_sub(1), cols.saturating_sub(1));
        let wall_probability = config.wall_probability.clamp(0.0, 1.0);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut cells: Array2<CellState> = Array2::default(config.size.to_nd_index());
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if coords == start || coords == exit {
                    continue;
                }
                if rng.random_bool(wall_probability) {
                    cells[coords.to_nd_index()] = CellState::Wall;
                }
            }
        }

        // clue placement overrides wall generation
        for clue in &config.clues {
            if clue.coords.0 >= rows || clue.coords.1 >= cols {
                log::warn!(
                    "clue at {:?} falls outside the {}x{} grid, ignored",
                    clue.coords,
                    rows,
                    cols
                );
                continue;
            }
            cells[clue.coords.to_nd_index()] = CellState::Open;
        }

        let grid = MazeGrid::from_cells(cells);
        log::debug!(
            "generated {}x{} maze with {} walls",
            rows,
            cols,
            grid.wall_count()
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let config = MazeConfig::default();

        let a = RandomMazeGenerator::new(42).generate(&config);
        let b = RandomMazeGenerator::new(42).generate(&config);
        let c = RandomMazeGenerator::new(43).generate(&config);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn special_cells_stay_open_even_at_full_wall_probability() {
        let config = MazeConfig {
            wall_probability: 1.0,
            ..Default::default()
        };

        let grid = RandomMazeGenerator::new(1).generate(&config);

        assert!(grid.is_open(grid.start()));
        assert!(grid.is_open(grid.exit()));
        for clue in &config.clues {
            assert!(grid.is_open(clue.coords));
        }
        let forced_open = 2 + config.clues.len() as CellCount;
        assert_eq!(grid.wall_count(), config.total_cells() - forced_open);
    }

    #[test]
    fn zero_probability_yields_an_open_grid() {
        let config = MazeConfig {
            wall_probability: 0.0,
            ..Default::default()
        };

        let grid = RandomMazeGenerator::new(9).generate(&config);

        assert_eq!(grid.wall_count(), 0);
    }
}
