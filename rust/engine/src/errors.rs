use thiserror::Error;

use crate::cards::CardId;
use crate::player::PlayerId;
use crate::status::GameState;

/// How a failed call should be read by the caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The arguments themselves were malformed; fix the request.
    InputValidation,
    /// The action is not legal given current game, lobby, or player
    /// state; re-read state and retry the correct action.
    StateConflict,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("a play must name at least one card")]
    EmptyPlay,
    #[error("a round is already running (state: {current:?})")]
    RoundInProgress { current: GameState },
    #[error("only the lobby owner may start a round")]
    NotLobbyOwner,
    #[error("not enough players in the lobby to start a round")]
    NotEnoughPlayers,
    #[error("cards cannot be played while the game is {current:?}")]
    CardsNotPlayable { current: GameState },
    #[error("the judge does not play cards this round")]
    JudgeCannotPlay,
    #[error("player {player} is not in the lobby")]
    UnknownPlayer { player: PlayerId },
    #[error("player {player} already submitted this round")]
    AlreadySubmitted { player: PlayerId },
    #[error("card {card} is not in the player's hand")]
    CardNotInHand { card: CardId },
}

impl GameError {
    /// Classifies the error for the caller. Every failure is local to one
    /// call and never retried internally.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::EmptyPlay => ErrorKind::InputValidation,
            GameError::RoundInProgress { .. }
            | GameError::NotLobbyOwner
            | GameError::NotEnoughPlayers
            | GameError::CardsNotPlayable { .. }
            | GameError::JudgeCannotPlay
            | GameError::UnknownPlayer { .. }
            | GameError::AlreadySubmitted { .. }
            | GameError::CardNotInHand { .. } => ErrorKind::StateConflict,
        }
    }
}
