use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cards::{Card, CardId};

/// Identity of a player, assigned when they join the lobby.
pub type PlayerId = Uuid;

/// Represents a participant and the response cards they currently hold.
/// The hand is only mutated through dealer commands; the orchestrator
/// never edits it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Player identity
    id: PlayerId,
    /// Response cards currently held
    hand: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn give_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes one hand card per requested id, multiplicity respected.
    /// Ids not present are skipped; the orchestrator validates coverage
    /// before any removal happens.
    pub fn remove_cards(&mut self, card_ids: &[CardId]) -> Vec<Card> {
        let mut taken = Vec::with_capacity(card_ids.len());
        for id in card_ids {
            if let Some(pos) = self.hand.iter().position(|c| c.id == *id) {
                taken.push(self.hand.remove(pos));
            }
        }
        taken
    }
}
