use rand::RngExt;
use rand::rngs::SmallRng;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShuffleOutcome {
    Skipped,
    Shuffled,
}

impl ShuffleOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Skipped => false,
            Self::Shuffled => true,
        }
    }
}

/// Periodic maze mutation: swaps a fixed number of wall cells open and the same number of open
/// cells walled, leaving the start and exit untouched. Start/exit connectivity is not checked;
/// a stranded player waits for a later shuffle to reopen a path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MazeShuffler {
    swap_count: usize,
}

impl MazeShuffler {
    pub const fn new(swap_count: usize) -> Self {
        Self { swap_count }
    }

    /// Swaps `swap_count` wall/open pairs sampled uniformly without replacement. When either
    /// pool is short the whole cycle is skipped; there is no partial swap.
    pub fn shuffle(&self, grid: &mut MazeGrid, rng: &mut SmallRng) -> ShuffleOutcome {
        let start = grid.start();
        let exit = grid.exit();

        let mut walls = Vec::new();
        let mut opens = Vec::new();
        for coords in grid.iter_coords() {
            if coords == start || coords == exit {
                continue;
            }
            match grid[coords] {
                CellState::Wall => walls.push(coords),
                CellState::Open => opens.push(coords),
            }
        }

        if walls.len() < self.swap_count || opens.len() < self.swap_count {
            log::warn!(
                "shuffle skipped: {} walls / {} opens available, {} needed",
                walls.len(),
                opens.len(),
                self.swap_count
            );
            return ShuffleOutcome::Skipped;
        }

        sample_in_place(&mut walls, self.swap_count, rng);
        sample_in_place(&mut opens, self.swap_count, rng);

        for i in 0..self.swap_count {
            grid[walls[i]] = CellState::Open;
            grid[opens[i]] = CellState::Wall;
        }

        log::debug!("shuffled {} wall/open pairs", self.swap_count);
        ShuffleOutcome::Shuffled
    }
}

/// Partial Fisher-Yates: after the call the first `amount` entries are a uniform sample of the
/// pool, drawn without replacement.
fn sample_in_place(pool: &mut [Coord2], amount: usize, rng: &mut SmallRng) {
    for i in 0..amount {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }
}
