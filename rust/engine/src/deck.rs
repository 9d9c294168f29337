use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{starter_responses, starter_templates, Card, Template};

/// Seeded draw piles for response cards and templates.
///
/// Both piles deal from a shuffled copy of their source lists. A pile that
/// runs dry is rebuilt from its source and reshuffled, so dealing only
/// returns `None` when the source list itself is empty. Same seed, same
/// deal order.
#[derive(Debug)]
pub struct Deck {
    source_responses: Vec<Card>,
    source_templates: Vec<Template>,
    responses: Vec<Card>,
    templates: Vec<Template>,
    response_pos: usize,
    template_pos: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(responses: Vec<Card>, templates: Vec<Template>, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self {
            responses: responses.clone(),
            templates: templates.clone(),
            source_responses: responses,
            source_templates: templates,
            response_pos: 0,
            template_pos: 0,
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Deck built from the starter pack, for demos and tests.
    pub fn starter_with_seed(seed: u64) -> Self {
        Self::new_with_seed(starter_responses(), starter_templates(), seed)
    }

    pub fn shuffle(&mut self) {
        self.responses = self.source_responses.clone();
        self.responses.shuffle(&mut self.rng);
        self.response_pos = 0;
        self.templates = self.source_templates.clone();
        self.templates.shuffle(&mut self.rng);
        self.template_pos = 0;
    }

    pub fn deal_response(&mut self) -> Option<Card> {
        if self.response_pos >= self.responses.len() {
            // pile is dry: recycle the source and keep dealing
            self.responses = self.source_responses.clone();
            self.responses.shuffle(&mut self.rng);
            self.response_pos = 0;
        }
        let card = self.responses.get(self.response_pos).cloned();
        if card.is_some() {
            self.response_pos += 1;
        }
        card
    }

    pub fn deal_template(&mut self) -> Option<Template> {
        if self.template_pos >= self.templates.len() {
            self.templates = self.source_templates.clone();
            self.templates.shuffle(&mut self.rng);
            self.template_pos = 0;
        }
        let template = self.templates.get(self.template_pos).cloned();
        if template.is_some() {
            self.template_pos += 1;
        }
        template
    }

    pub fn responses_remaining(&self) -> usize {
        self.responses.len().saturating_sub(self.response_pos)
    }

    pub fn templates_remaining(&self) -> usize {
        self.templates.len().saturating_sub(self.template_pos)
    }
}
