use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

/// Coarse state of one round cycle.
/// Exactly one value holds at any instant; the cycle loops
/// Waiting → Playing → Judging → Waiting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    /// Between rounds; the lobby owner may start the next one
    Waiting,
    /// Players are submitting cards against the active template
    Playing,
    /// All submissions are in; the judge is deciding
    Judging,
}

/// Owner of the coarse game state and its transitions.
#[cfg_attr(test, automock)]
pub trait GameStatus {
    fn current_state(&self) -> GameState;
    fn switch_to_playing(&mut self);
    fn switch_to_judging(&mut self);
    fn switch_to_waiting(&mut self);
}

/// In-memory state tracker, starting at `Waiting`.
///
/// Switch commands apply unconditionally: the orchestrator is the sole
/// caller and validates the transition before issuing the command.
#[derive(Debug)]
pub struct RoundStatus {
    state: GameState,
}

impl RoundStatus {
    pub fn new() -> Self {
        Self {
            state: GameState::Waiting,
        }
    }
}

impl Default for RoundStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStatus for RoundStatus {
    fn current_state(&self) -> GameState {
        self.state
    }

    fn switch_to_playing(&mut self) {
        self.state = GameState::Playing;
    }

    fn switch_to_judging(&mut self) {
        self.state = GameState::Judging;
    }

    fn switch_to_waiting(&mut self) {
        self.state = GameState::Waiting;
    }
}
