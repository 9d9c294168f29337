//! # punchline-engine: Party Card Game Round Coordinator
//!
//! The authoritative state machine for a judge-based card-matching party
//! game. One `Game` instance coordinates one session: it validates who may
//! act, in what state, with what cards, and issues commands to its four
//! collaborators at exactly the right points. Deck shuffling is seeded for
//! reproducible deals.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card and template representation, starter pack
//! - [`deck`] - Deterministic draw piles with ChaCha20 RNG
//! - [`player`] - Player identity and owned hands
//! - [`status`] - Coarse game state (Waiting/Playing/Judging) and its owner
//! - [`lobby`] - Roster, owner, and headcount policy
//! - [`judge`] - Judge rotation
//! - [`dealer`] - Hands, template, and submissions
//! - [`game`] - The orchestrator: round start and card play validation
//! - [`logger`] - Round-history JSONL records
//! - [`errors`] - Error types and the input-validation/state-conflict split
//!
//! ## Quick Start
//!
//! ```rust
//! use punchline_engine::dealer::Dealer;
//! use punchline_engine::deck::Deck;
//! use punchline_engine::game::Game;
//! use punchline_engine::judge::RotatingJudgePicker;
//! use punchline_engine::lobby::{Lobby, PartyLobby};
//! use punchline_engine::status::{GameState, RoundStatus};
//! use uuid::Uuid;
//!
//! let owner = Uuid::new_v4();
//! let mut lobby = PartyLobby::new(owner);
//! lobby.add_player(Uuid::new_v4());
//! lobby.add_player(Uuid::new_v4());
//!
//! let dealer = Dealer::new(Deck::starter_with_seed(7));
//! let mut game = Game::new(RoundStatus::new(), dealer, lobby, RotatingJudgePicker::new());
//!
//! game.start_game(owner).expect("owner can start");
//! assert_eq!(game.game_state(), GameState::Playing);
//!
//! // every player now holds a full hand; the judge sits the round out
//! let judge = game.judge_player_id().expect("judge picked");
//! assert!(game.lobby().players().contains(&judge));
//! ```
//!
//! ## Validation
//!
//! Both operations check all preconditions before any collaborator
//! command, so a failed call leaves no trace:
//!
//! ```rust
//! use punchline_engine::dealer::Dealer;
//! use punchline_engine::deck::Deck;
//! use punchline_engine::errors::{ErrorKind, GameError};
//! use punchline_engine::game::Game;
//! use punchline_engine::judge::RotatingJudgePicker;
//! use punchline_engine::lobby::PartyLobby;
//! use punchline_engine::status::RoundStatus;
//! use uuid::Uuid;
//!
//! let owner = Uuid::new_v4();
//! let lobby = PartyLobby::new(owner); // nobody else joined
//! let dealer = Dealer::new(Deck::starter_with_seed(7));
//! let mut game = Game::new(RoundStatus::new(), dealer, lobby, RotatingJudgePicker::new());
//!
//! let err = game.start_game(owner).unwrap_err();
//! assert_eq!(err, GameError::NotEnoughPlayers);
//! assert_eq!(err.kind(), ErrorKind::StateConflict);
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod game;
pub mod judge;
pub mod lobby;
pub mod logger;
pub mod player;
pub mod status;
