use std::collections::HashMap;

use tracing::{debug, info};

use crate::cards::{Card, CardId, Template};
use crate::dealer::CardState;
use crate::errors::GameError;
use crate::judge::JudgePicker;
use crate::lobby::Lobby;
use crate::player::PlayerId;
use crate::status::{GameState, GameStatus};

/// The round coordinator. Composes the four collaborators and is the sole
/// place where start/play validation lives: every call checks all
/// preconditions first, then issues collaborator commands, so no side
/// effect ever happens on a failed call.
///
/// A `Game` exclusively owns its collaborators; one instance serves one
/// session and concurrent callers must serialize access themselves.
///
/// # Examples
///
/// ```
/// use punchline_engine::dealer::Dealer;
/// use punchline_engine::deck::Deck;
/// use punchline_engine::game::Game;
/// use punchline_engine::judge::RotatingJudgePicker;
/// use punchline_engine::lobby::PartyLobby;
/// use punchline_engine::status::{GameState, RoundStatus};
/// use uuid::Uuid;
///
/// let owner = Uuid::new_v4();
/// let mut lobby = PartyLobby::new(owner);
/// lobby.add_player(Uuid::new_v4());
/// lobby.add_player(Uuid::new_v4());
///
/// let dealer = Dealer::new(Deck::starter_with_seed(42));
/// let mut game = Game::new(RoundStatus::new(), dealer, lobby, RotatingJudgePicker::new());
///
/// game.start_game(owner).expect("owner starts from Waiting");
/// assert_eq!(game.game_state(), GameState::Playing);
/// assert!(game.template_card().is_some());
/// assert!(game.judge_player_id().is_some());
/// ```
#[derive(Debug)]
pub struct Game<S, C, L, J>
where
    S: GameStatus,
    C: CardState,
    L: Lobby,
    J: JudgePicker,
{
    status: S,
    card_state: C,
    lobby: L,
    judge_picker: J,
}

impl<S, C, L, J> Game<S, C, L, J>
where
    S: GameStatus,
    C: CardState,
    L: Lobby,
    J: JudgePicker,
{
    pub fn new(status: S, card_state: C, lobby: L, judge_picker: J) -> Self {
        Self {
            status,
            card_state,
            lobby,
            judge_picker,
        }
    }

    /// Judge of the current round, straight from the picker.
    pub fn judge_player_id(&self) -> Option<PlayerId> {
        self.judge_picker.current_judge_id()
    }

    /// The active prompt, straight from the card state.
    pub fn template_card(&self) -> Option<Template> {
        self.card_state.current_template_card()
    }

    /// Coarse game state, straight from the status tracker.
    pub fn game_state(&self) -> GameState {
        self.status.current_state()
    }

    pub fn card_state(&self) -> &C {
        &self.card_state
    }

    pub fn lobby(&self) -> &L {
        &self.lobby
    }

    pub fn lobby_mut(&mut self) -> &mut L {
        &mut self.lobby
    }

    /// Status access for the owning session layer, which drives the
    /// transitions the orchestrator does not (e.g. `Judging → Waiting`
    /// after the judge has decided).
    pub fn status_mut(&mut self) -> &mut S {
        &mut self.status
    }

    /// Starts a new round on behalf of `requester`.
    ///
    /// Checks run in a fixed order so callers see deterministic errors:
    /// coarse state, then ownership, then headcount. Only when all three
    /// pass are commands issued, in this order: hands refilled, template
    /// drawn, judge picked, state switched to `Playing`. Judge selection
    /// runs after dealing so the picker sees the already-dealt roster.
    ///
    /// # Errors
    ///
    /// All state-conflicts:
    /// - [`GameError::RoundInProgress`] - state is not `Waiting`
    /// - [`GameError::NotLobbyOwner`] - requester is not the lobby owner
    /// - [`GameError::NotEnoughPlayers`] - roster below the lobby threshold
    pub fn start_game(&mut self, requester: PlayerId) -> Result<(), GameError> {
        let current = self.status.current_state();
        if current != GameState::Waiting {
            return Err(GameError::RoundInProgress { current });
        }
        if requester != self.lobby.owner_id() {
            return Err(GameError::NotLobbyOwner);
        }
        if !self.lobby.has_enough_players() {
            return Err(GameError::NotEnoughPlayers);
        }

        let roster = self.lobby.players();
        self.card_state.refill_player_cards(&roster);
        self.card_state.draw_template_card();
        self.judge_picker.pick_new_judge(&roster);
        self.status.switch_to_playing();
        info!(players = roster.len(), "round started");
        Ok(())
    }

    /// Submits `card_ids` as `player`'s play for the current round.
    ///
    /// On success the named cards leave the player's hand and become their
    /// single submission; once every non-judge roster member has
    /// submitted, the round switches to `Judging`.
    ///
    /// # Errors
    ///
    /// - [`GameError::EmptyPlay`] - no card named (input-validation)
    /// - [`GameError::CardsNotPlayable`] - state is not `Playing`
    /// - [`GameError::JudgeCannotPlay`] - the judge never plays
    /// - [`GameError::UnknownPlayer`] - player is not in the lobby
    /// - [`GameError::AlreadySubmitted`] - one submission per round
    /// - [`GameError::CardNotInHand`] - a named id is missing from the
    ///   hand, or named more times than it is held
    pub fn play_cards(&mut self, player: PlayerId, card_ids: &[CardId]) -> Result<(), GameError> {
        if card_ids.is_empty() {
            return Err(GameError::EmptyPlay);
        }
        let current = self.status.current_state();
        if current != GameState::Playing {
            return Err(GameError::CardsNotPlayable { current });
        }
        if self.judge_picker.current_judge_id() == Some(player) {
            return Err(GameError::JudgeCannotPlay);
        }
        let roster = self.lobby.players();
        if !roster.contains(&player) {
            return Err(GameError::UnknownPlayer { player });
        }
        if self.card_state.submitted_players().contains(&player) {
            return Err(GameError::AlreadySubmitted { player });
        }
        check_hand_covers(&self.card_state.hand(player), card_ids)?;

        self.card_state.take_submission(player, card_ids);
        debug!(%player, cards = card_ids.len(), "submission accepted");

        let judge = self.judge_picker.current_judge_id();
        let submitted = self.card_state.submitted_players();
        let all_in = roster
            .iter()
            .filter(|p| Some(**p) != judge)
            .all(|p| submitted.contains(p));
        if all_in {
            self.status.switch_to_judging();
            info!(submissions = submitted.len(), "all submissions in, judging begins");
        }
        Ok(())
    }
}

/// Checks that `hand` covers every requested id, counting multiplicity:
/// an id may not be named more times than it occurs in the hand.
fn check_hand_covers(hand: &[Card], card_ids: &[CardId]) -> Result<(), GameError> {
    let mut held: HashMap<CardId, usize> = HashMap::new();
    for card in hand {
        *held.entry(card.id).or_insert(0) += 1;
    }
    for id in card_ids {
        match held.get_mut(id) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return Err(GameError::CardNotInHand { card: *id }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::dealer::MockCardState;
    use crate::errors::ErrorKind;
    use crate::judge::MockJudgePicker;
    use crate::lobby::MockLobby;
    use crate::status::MockGameStatus;
    use uuid::Uuid;

    fn roster_of(n: usize) -> Vec<PlayerId> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    fn status_reporting(state: GameState) -> MockGameStatus {
        let mut status = MockGameStatus::new();
        status.expect_current_state().return_const(state);
        status
    }

    #[test]
    fn start_game_rejects_when_round_already_running() {
        for state in [GameState::Playing, GameState::Judging] {
            let mut game = Game::new(
                status_reporting(state),
                MockCardState::new(),
                MockLobby::new(),
                MockJudgePicker::new(),
            );
            let err = game.start_game(Uuid::new_v4()).unwrap_err();
            assert_eq!(err, GameError::RoundInProgress { current: state });
            assert_eq!(err.kind(), ErrorKind::StateConflict);
        }
    }

    #[test]
    fn start_game_rejects_non_owner_before_checking_headcount() {
        let owner = Uuid::new_v4();
        let mut lobby = MockLobby::new();
        lobby.expect_owner_id().return_const(owner);
        // has_enough_players must not be consulted: no expectation set.
        let mut game = Game::new(
            status_reporting(GameState::Waiting),
            MockCardState::new(),
            lobby,
            MockJudgePicker::new(),
        );
        let err = game.start_game(Uuid::new_v4()).unwrap_err();
        assert_eq!(err, GameError::NotLobbyOwner);
    }

    #[test]
    fn start_game_rejects_short_roster_without_side_effects() {
        let owner = Uuid::new_v4();
        let mut lobby = MockLobby::new();
        lobby.expect_owner_id().return_const(owner);
        lobby.expect_has_enough_players().return_const(false);
        let mut game = Game::new(
            status_reporting(GameState::Waiting),
            MockCardState::new(),
            lobby,
            MockJudgePicker::new(),
        );
        let err = game.start_game(owner).unwrap_err();
        assert_eq!(err, GameError::NotEnoughPlayers);
    }

    #[test]
    fn start_game_issues_each_command_exactly_once_with_full_roster() {
        let roster = roster_of(3);
        let owner = roster[0];

        let mut status = MockGameStatus::new();
        status
            .expect_current_state()
            .return_const(GameState::Waiting);
        status.expect_switch_to_playing().times(1).return_const(());

        let mut lobby = MockLobby::new();
        lobby.expect_owner_id().return_const(owner);
        lobby.expect_has_enough_players().return_const(true);
        lobby.expect_players().return_const(roster.clone());

        let mut card_state = MockCardState::new();
        let expected = roster.clone();
        card_state
            .expect_refill_player_cards()
            .withf(move |players| players == expected.as_slice())
            .times(1)
            .return_const(());
        card_state
            .expect_draw_template_card()
            .times(1)
            .return_const(());

        let mut judge_picker = MockJudgePicker::new();
        let expected = roster.clone();
        judge_picker
            .expect_pick_new_judge()
            .withf(move |players| players == expected.as_slice())
            .times(1)
            .return_const(());

        let mut game = Game::new(status, card_state, lobby, judge_picker);
        game.start_game(owner).unwrap();
    }

    #[test]
    fn play_cards_rejects_empty_play_regardless_of_state() {
        // No expectations anywhere: the empty check fires first.
        let mut game = Game::new(
            MockGameStatus::new(),
            MockCardState::new(),
            MockLobby::new(),
            MockJudgePicker::new(),
        );
        let err = game.play_cards(Uuid::new_v4(), &[]).unwrap_err();
        assert_eq!(err, GameError::EmptyPlay);
        assert_eq!(err.kind(), ErrorKind::InputValidation);
    }

    #[test]
    fn play_cards_rejects_outside_playing_state() {
        let mut game = Game::new(
            status_reporting(GameState::Waiting),
            MockCardState::new(),
            MockLobby::new(),
            MockJudgePicker::new(),
        );
        let err = game.play_cards(Uuid::new_v4(), &[1]).unwrap_err();
        assert_eq!(
            err,
            GameError::CardsNotPlayable {
                current: GameState::Waiting
            }
        );
    }

    #[test]
    fn play_cards_rejects_the_judge_even_if_they_hold_the_card() {
        let judge = Uuid::new_v4();
        let mut judge_picker = MockJudgePicker::new();
        judge_picker
            .expect_current_judge_id()
            .return_const(Some(judge));
        let mut game = Game::new(
            status_reporting(GameState::Playing),
            MockCardState::new(),
            MockLobby::new(),
            judge_picker,
        );
        let err = game.play_cards(judge, &[1]).unwrap_err();
        assert_eq!(err, GameError::JudgeCannotPlay);
    }

    #[test]
    fn play_cards_rejects_players_outside_the_roster() {
        let roster = roster_of(3);
        let stranger = Uuid::new_v4();

        let mut judge_picker = MockJudgePicker::new();
        judge_picker
            .expect_current_judge_id()
            .return_const(Some(roster[0]));
        let mut lobby = MockLobby::new();
        lobby.expect_players().return_const(roster);

        let mut game = Game::new(
            status_reporting(GameState::Playing),
            MockCardState::new(),
            lobby,
            judge_picker,
        );
        let err = game.play_cards(stranger, &[1]).unwrap_err();
        assert_eq!(err, GameError::UnknownPlayer { player: stranger });
    }

    #[test]
    fn play_cards_rejects_ids_missing_from_the_hand() {
        let roster = roster_of(3);
        let player = roster[1];

        let mut judge_picker = MockJudgePicker::new();
        judge_picker
            .expect_current_judge_id()
            .return_const(Some(roster[0]));
        let mut lobby = MockLobby::new();
        lobby.expect_players().return_const(roster);
        let mut card_state = MockCardState::new();
        card_state
            .expect_submitted_players()
            .return_const(Vec::new());
        card_state
            .expect_hand()
            .return_const(vec![Card::new(1, "held")]);

        let mut game = Game::new(
            status_reporting(GameState::Playing),
            card_state,
            lobby,
            judge_picker,
        );
        let err = game.play_cards(player, &[2]).unwrap_err();
        assert_eq!(err, GameError::CardNotInHand { card: 2 });
    }

    #[test]
    fn play_cards_rejects_over_multiplicity_requests() {
        let roster = roster_of(3);
        let player = roster[1];

        let mut judge_picker = MockJudgePicker::new();
        judge_picker
            .expect_current_judge_id()
            .return_const(Some(roster[0]));
        let mut lobby = MockLobby::new();
        lobby.expect_players().return_const(roster);
        let mut card_state = MockCardState::new();
        card_state
            .expect_submitted_players()
            .return_const(Vec::new());
        // one copy held, two requested
        card_state
            .expect_hand()
            .return_const(vec![Card::new(1, "held"), Card::new(2, "held")]);

        let mut game = Game::new(
            status_reporting(GameState::Playing),
            card_state,
            lobby,
            judge_picker,
        );
        let err = game.play_cards(player, &[1, 1]).unwrap_err();
        assert_eq!(err, GameError::CardNotInHand { card: 1 });
    }

    #[test]
    fn play_cards_rejects_a_second_submission_from_the_same_player() {
        let roster = roster_of(3);
        let player = roster[1];

        let mut judge_picker = MockJudgePicker::new();
        judge_picker
            .expect_current_judge_id()
            .return_const(Some(roster[0]));
        let mut lobby = MockLobby::new();
        lobby.expect_players().return_const(roster);
        let mut card_state = MockCardState::new();
        card_state
            .expect_submitted_players()
            .return_const(vec![player]);

        let mut game = Game::new(
            status_reporting(GameState::Playing),
            card_state,
            lobby,
            judge_picker,
        );
        let err = game.play_cards(player, &[1]).unwrap_err();
        assert_eq!(err, GameError::AlreadySubmitted { player });
    }

    #[test]
    fn last_submission_switches_the_round_to_judging() {
        let roster = roster_of(3);
        let judge = roster[0];
        let other = roster[1];
        let player = roster[2];

        let mut status = MockGameStatus::new();
        status
            .expect_current_state()
            .return_const(GameState::Playing);
        status.expect_switch_to_judging().times(1).return_const(());

        let mut judge_picker = MockJudgePicker::new();
        judge_picker
            .expect_current_judge_id()
            .return_const(Some(judge));
        let mut lobby = MockLobby::new();
        lobby.expect_players().return_const(roster.clone());

        let mut card_state = MockCardState::new();
        // `other` submitted earlier; after this call both non-judges are in.
        let mut submitted = vec![vec![other], vec![other, player]].into_iter();
        card_state
            .expect_submitted_players()
            .returning(move || submitted.next().unwrap_or_default());
        card_state.expect_hand().return_const(vec![Card::new(1, "held")]);
        card_state
            .expect_take_submission()
            .times(1)
            .return_const(());

        let mut game = Game::new(status, card_state, lobby, judge_picker);
        game.play_cards(player, &[1]).unwrap();
    }
}
