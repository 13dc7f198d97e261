use core::ops::{BitOr, Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use web_time::Duration;

pub use cell::*;
pub use clues::*;
pub use code::*;
pub use error::*;
pub use generator::*;
pub use player::*;
pub use session::*;
pub use shuffle::*;
pub use types::*;

mod cell;
mod clues;
mod code;
mod error;
mod generator;
mod player;
mod session;
mod shuffle;
mod types;

/// Fixed-at-construction parameters of one maze session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Grid dimensions as `(rows, cols)`.
    pub size: Coord2,
    /// Probability that a non-special cell starts as a wall.
    pub wall_probability: f64,
    pub clues: Vec<Clue>,
    pub secret_code: String,
    /// Minimum elapsed time between wall shuffles.
    pub shuffle_cooldown: Duration,
    /// Wall/open pairs swapped per shuffle.
    pub shuffle_swaps: usize,
    pub total_time: Duration,
    pub max_code_len: usize,
}

impl MazeConfig {
    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: (10, 10),
            wall_probability: 0.3,
            clues: vec![
                Clue::new((2, 3), "First clue: look for the hidden code."),
                Clue::new((4, 5), "Second clue: the code is MAGIC."),
                Clue::new((7, 2), "Third clue: enter the code to open the exit."),
            ],
            secret_code: "MAGIC".into(),
            shuffle_cooldown: Duration::from_secs(6),
            shuffle_swaps: 5,
            total_time: Duration::from_secs(80),
            max_code_len: 12,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeGrid {
    cells: Array2<CellState>,
}

impl MazeGrid {
    pub fn from_cells(cells: Array2<CellState>) -> Self {
        Self { cells }
    }

    pub fn all_open(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn from_wall_coords(size: Coord2, wall_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::all_open(size);

        for &coords in wall_coords {
            let coords = grid.validate_coords(coords)?;
            grid[coords] = CellState::Wall;
        }

        Ok(grid)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn wall_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| !cell.is_open())
            .count()
            .try_into()
            .unwrap()
    }

    /// The fixed entry cell.
    pub fn start(&self) -> Coord2 {
        (0, 0)
    }

    /// The fixed escape cell, bottom-right corner.
    pub fn exit(&self) -> Coord2 {
        let (rows, cols) = self.size();
        (rows.saturating_sub(1), cols.saturating_sub(1))
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<CellState> {
        Ok(self[self.validate_coords(coords)?])
    }

    pub fn set_cell(&mut self, coords: Coord2, state: CellState) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self[coords] = state;
        Ok(())
    }

    pub fn is_open(&self, coords: Coord2) -> bool {
        self[coords].is_open()
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

impl Index<Coord2> for MazeGrid {
    type Output = CellState;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

impl IndexMut<Coord2> for MazeGrid {
    fn index_mut(&mut self, (row, col): Coord2) -> &mut Self::Output {
        &mut self.cells[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    Blocked,
    Moved,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Blocked => false,
            Self::Moved => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Incorrect,
    Correct,
}

/// What a single call to [`MazeSession::advance`] changed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    /// Something visible changed; redraw.
    Updated,
    /// The code was accepted this tick; trigger the cosmetic unlock effect.
    Unlocked,
    Escaped,
    TimedOut,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Updated => true,
            Unlocked => true,
            Escaped => true,
            TimedOut => true,
        }
    }
}

impl BitOr for TickOutcome {
    type Output = TickOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use TickOutcome::*;
        match (self, rhs) {
            (TimedOut, _) => TimedOut,
            (_, TimedOut) => TimedOut,
            (Escaped, _) => Escaped,
            (_, Escaped) => Escaped,
            (Unlocked, _) => Unlocked,
            (_, Unlocked) => Unlocked,
            (Updated, _) => Updated,
            (_, Updated) => Updated,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_wall_coords_places_walls_and_rejects_out_of_bounds() {
        let grid = MazeGrid::from_wall_coords((3, 3), &[(1, 1), (2, 0)]).unwrap();

        assert_eq!(grid.cell_state((1, 1)), Ok(CellState::Wall));
        assert_eq!(grid.cell_state((0, 0)), Ok(CellState::Open));
        assert_eq!(grid.wall_count(), 2);

        let err = MazeGrid::from_wall_coords((3, 3), &[(3, 0)]);
        assert_eq!(err, Err(GameError::InvalidCoords));
    }

    #[test]
    fn cell_queries_validate_coordinates() {
        let mut grid = MazeGrid::all_open((2, 2));

        assert_eq!(grid.cell_state((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(
            grid.set_cell((0, 2), CellState::Wall),
            Err(GameError::InvalidCoords)
        );

        grid.set_cell((1, 0), CellState::Wall).unwrap();
        assert_eq!(grid.cell_state((1, 0)), Ok(CellState::Wall));
    }

    #[test]
    fn start_and_exit_sit_in_opposite_corners() {
        let grid = MazeGrid::all_open((4, 6));
        assert_eq!(grid.start(), (0, 0));
        assert_eq!(grid.exit(), (3, 5));
    }

    #[test]
    fn tick_outcomes_merge_by_priority() {
        use TickOutcome::*;
        assert_eq!(NoChange | Updated, Updated);
        assert_eq!(Updated | Unlocked, Unlocked);
        assert_eq!(Unlocked | Escaped, Escaped);
        assert_eq!(Escaped | TimedOut, TimedOut);
        assert_eq!(NoChange | NoChange, NoChange);
        assert!(!NoChange.has_update());
        assert!(Unlocked.has_update());
    }
}
