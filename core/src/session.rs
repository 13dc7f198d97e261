use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - Active -> Won (correct code submitted)
/// - Won -> Escaped (player reaches the exit)
/// - Active -> TimedOut, Won -> TimedOut (countdown elapsed)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Active,
    Won,
    Escaped,
    TimedOut,
}

impl SessionState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    /// Once terminal, no further mutation, input, or movement is accepted.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Escaped | Self::TimedOut)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Active
    }
}

/// Per-tick input event handed in by the driver; at most one applies per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayerInput {
    Move(Direction),
    BeginCodeEntry,
    AppendChar(char),
    Backspace,
    CancelCodeEntry,
    SubmitCode,
}

/// One game from start to finish: grid, player, clues, code challenge, and both timers, driven
/// by an external loop through [`MazeSession::advance`].
#[derive(Clone, Debug)]
pub struct MazeSession {
    config: MazeConfig,
    grid: MazeGrid,
    player: Player,
    clues: ClueLedger,
    code: CodeChallenge,
    shuffler: MazeShuffler,
    rng: SmallRng,
    state: SessionState,
    last_hint: Option<String>,
    started_at: Instant,
    last_shuffle_at: Instant,
}

impl MazeSession {
    /// Builds a session over a generated grid. The grid shape must match the config, clue
    /// coordinates must be in bounds, and the start, exit, and clue cells are forced open.
    pub fn new(
        config: MazeConfig,
        mut grid: MazeGrid,
        seed: u64,
        started_at: Instant,
    ) -> Result<Self> {
        if grid.size() != config.size {
            return Err(GameError::InvalidGridShape);
        }
        for clue in &config.clues {
            grid.validate_coords(clue.coords)?;
        }

        let start = grid.start();
        let exit = grid.exit();
        grid[start] = CellState::Open;
        grid[exit] = CellState::Open;
        for clue in &config.clues {
            grid[clue.coords] = CellState::Open;
        }

        Ok(Self {
            player: Player::new(start),
            clues: ClueLedger::new(config.clues.clone()),
            code: CodeChallenge::default(),
            shuffler: MazeShuffler::new(config.shuffle_swaps),
            rng: SmallRng::seed_from_u64(seed),
            state: SessionState::default(),
            last_hint: None,
            started_at,
            last_shuffle_at: started_at,
            grid,
            config,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn player_pos(&self) -> Coord2 {
        self.player.pos()
    }

    pub fn clues(&self) -> &ClueLedger {
        &self.clues
    }

    pub fn code(&self) -> &CodeChallenge {
        &self.code
    }

    /// Hint text of the most recently discovered clue, for transient display.
    pub fn last_hint(&self) -> Option<&str> {
        self.last_hint.as_deref()
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Whole seconds left on the countdown, clamped to zero.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.config
            .total_time
            .saturating_sub(now.saturating_duration_since(self.started_at))
            .as_secs()
    }

    /// Runs one tick: timeout check, then maze shuffle, then at most one input event, then the
    /// escape check. Total for all inputs; rejected actions come back as `NoChange`.
    pub fn advance(&mut self, now: Instant, input: Option<PlayerInput>) -> TickOutcome {
        if self.state.is_terminal() {
            return TickOutcome::NoChange;
        }

        if now.saturating_duration_since(self.started_at) >= self.config.total_time {
            self.state = SessionState::TimedOut;
            log::debug!("countdown elapsed, session timed out");
            return TickOutcome::TimedOut;
        }

        let mut outcome = TickOutcome::NoChange;

        if self.state == SessionState::Active
            && now.saturating_duration_since(self.last_shuffle_at) >= self.config.shuffle_cooldown
        {
            // the cooldown restarts even when the swap is skipped for short pools
            self.last_shuffle_at = now;
            if self
                .shuffler
                .shuffle(&mut self.grid, &mut self.rng)
                .has_update()
            {
                outcome = outcome | TickOutcome::Updated;
            }
        }

        if let Some(input) = input {
            outcome = outcome | self.apply_input(input);
        }

        if self.state.is_won() && self.player.pos() == self.grid.exit() {
            self.state = SessionState::Escaped;
            log::debug!("player reached the exit");
            outcome = outcome | TickOutcome::Escaped;
        }

        outcome
    }

    fn apply_input(&mut self, input: PlayerInput) -> TickOutcome {
        use PlayerInput::*;

        match input {
            Move(direction) => {
                if self
                    .player
                    .attempt_move(direction, &self.grid)
                    .has_update()
                {
                    let hint = self.clues.check_discovery(self.player.pos());
                    if let Some(hint) = hint {
                        self.last_hint = Some(hint.to_owned());
                    }
                    TickOutcome::Updated
                } else {
                    TickOutcome::NoChange
                }
            }
            BeginCodeEntry => {
                // code entry opens only once every clue has been found
                if self.state == SessionState::Active
                    && self.clues.all_discovered()
                    && !self.code.input_active()
                {
                    self.code.begin();
                    TickOutcome::Updated
                } else {
                    TickOutcome::NoChange
                }
            }
            AppendChar(ch) => {
                if self.code.push_char(ch, self.config.max_code_len) {
                    TickOutcome::Updated
                } else {
                    TickOutcome::NoChange
                }
            }
            Backspace => {
                if self.code.pop_char() {
                    TickOutcome::Updated
                } else {
                    TickOutcome::NoChange
                }
            }
            CancelCodeEntry => {
                if self.code.cancel() {
                    TickOutcome::Updated
                } else {
                    TickOutcome::NoChange
                }
            }
            SubmitCode => {
                if !self.code.input_active() {
                    return TickOutcome::NoChange;
                }
                match self.code.submit(&self.config.secret_code) {
                    SubmitOutcome::Correct => {
                        self.mark_won();
                        TickOutcome::Unlocked
                    }
                    SubmitOutcome::Incorrect => TickOutcome::Updated,
                }
            }
        }
    }

    fn mark_won(&mut self) {
        self.state = SessionState::Won;
        self.open_exit_wall();
        log::debug!("code accepted, exit wall opened");
    }

    /// One-time unlock: the exit cell and its last-row neighbor are forced open.
    fn open_exit_wall(&mut self) {
        let (row, col) = self.grid.exit();
        if col >= 1 {
            self.grid[(row, col - 1)] = CellState::Open;
        }
        self.grid[(row, col)] = CellState::Open;
    }
}
