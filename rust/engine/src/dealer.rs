use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Template};
use crate::deck::Deck;
use crate::player::{Player, PlayerId};

#[cfg(test)]
use mockall::automock;

/// Number of response cards each player holds when a round starts.
pub const HAND_SIZE: usize = 7;

/// One player's cards put forward for the current round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Who played the cards
    pub player: PlayerId,
    /// The cards, in the order they were named
    pub cards: Vec<Card>,
}

/// Owner of per-player hands, the active template, and the round's
/// submissions.
#[cfg_attr(test, automock)]
pub trait CardState {
    /// The active prompt; `None` before the first draw.
    fn current_template_card(&self) -> Option<Template>;
    /// Tops every given player's hand up to the fixed hand size and
    /// clears the previous round's submissions.
    fn refill_player_cards(&mut self, players: &[PlayerId]);
    /// Selects a new prompt, replacing any previous one wholesale.
    fn draw_template_card(&mut self);
    /// Snapshot of a player's hand; empty for unknown players.
    fn hand(&self, player: PlayerId) -> Vec<Card>;
    /// Players who have already submitted this round.
    fn submitted_players(&self) -> Vec<PlayerId>;
    /// Moves the named cards out of the player's hand and stores them as
    /// that player's submission. The orchestrator validates possession
    /// before issuing this command.
    fn take_submission(&mut self, player: PlayerId, cards: &[CardId]);
}

/// In-memory card state backed by a seeded deck. Hands are owned here and
/// only change through the trait commands.
#[derive(Debug)]
pub struct Dealer {
    deck: Deck,
    players: HashMap<PlayerId, Player>,
    template: Option<Template>,
    submissions: Vec<Submission>,
    hand_size: usize,
}

impl Dealer {
    pub fn new(deck: Deck) -> Self {
        Self::with_hand_size(deck, HAND_SIZE)
    }

    pub fn with_hand_size(deck: Deck, hand_size: usize) -> Self {
        Self {
            deck,
            players: HashMap::new(),
            template: None,
            submissions: Vec::new(),
            hand_size,
        }
    }

    /// The round's submissions so far, in arrival order. Read by the
    /// judging layer; the orchestrator never inspects them directly.
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }
}

impl CardState for Dealer {
    fn current_template_card(&self) -> Option<Template> {
        self.template.clone()
    }

    fn refill_player_cards(&mut self, players: &[PlayerId]) {
        self.submissions.clear();
        for id in players {
            let player = self
                .players
                .entry(*id)
                .or_insert_with(|| Player::new(*id));
            while player.hand_size() < self.hand_size {
                match self.deck.deal_response() {
                    Some(card) => player.give_card(card),
                    None => break,
                }
            }
        }
    }

    fn draw_template_card(&mut self) {
        if let Some(template) = self.deck.deal_template() {
            self.template = Some(template);
        }
    }

    fn hand(&self, player: PlayerId) -> Vec<Card> {
        self.players
            .get(&player)
            .map(|p| p.hand().to_vec())
            .unwrap_or_default()
    }

    fn submitted_players(&self) -> Vec<PlayerId> {
        self.submissions.iter().map(|s| s.player).collect()
    }

    fn take_submission(&mut self, player: PlayerId, cards: &[CardId]) {
        if let Some(p) = self.players.get_mut(&player) {
            let taken = p.remove_cards(cards);
            self.submissions.push(Submission {
                player,
                cards: taken,
            });
        }
    }
}
