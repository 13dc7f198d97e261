use serde::{Deserialize, Serialize};

/// State of a single maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Open,
    Wall,
}

impl CellState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Open
    }
}
