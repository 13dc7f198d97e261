use serde::{Deserialize, Serialize};

use crate::*;

/// The player's position; only validated moves may change it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pos: Coord2,
}

impl Player {
    pub const fn new(pos: Coord2) -> Self {
        Self { pos }
    }

    pub const fn pos(&self) -> Coord2 {
        self.pos
    }

    /// Steps one cell in `direction` when the target is in bounds and open. A blocked move is a
    /// normal rejection, not an error.
    pub fn attempt_move(&mut self, direction: Direction, grid: &MazeGrid) -> MoveOutcome {
        let Some(target) = direction.step(self.pos, grid.size()) else {
            return MoveOutcome::Blocked;
        };

        if !grid.is_open(target) {
            return MoveOutcome::Blocked;
        }

        self.pos = target;
        MoveOutcome::Moved
    }
}
