use serde::{Deserialize, Serialize};

/// Identifier of a response card, unique within the active deck.
pub type CardId = u32;

/// Represents a single response card with its id and display text.
/// Cards are immutable once dealt; players match them against the
/// round's template.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Deck-unique card identifier
    pub id: CardId,
    /// Display text shown to players
    pub text: String,
}

/// The active prompt card that sets the round's theme.
/// Exactly one template is active at a time; it is replaced wholesale
/// when a new round starts.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Prompt text, with blanks for the submitted cards
    pub text: String,
}

impl Card {
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Built-in set of response cards, mostly for demos and tests.
/// Real deployments load their own packs.
pub fn starter_responses() -> Vec<Card> {
    let texts = [
        "an emergency kazoo",
        "a suspicious amount of glitter",
        "the world's loudest whisper",
        "interpretive dance",
        "a motivational poster of a cat",
        "forty unread voicemails",
        "an extremely confident pigeon",
        "the office coffee machine",
        "a fog machine with no off switch",
        "my neighbor's lawn gnomes",
        "a surprisingly heavy feather",
        "the last slice of pizza",
        "a committee meeting about committee meetings",
        "one sock, origin unknown",
        "a karaoke rendition of the alphabet",
        "an inflatable briefcase",
        "the smell of a new book",
        "three raccoons in a trench coat",
        "a very formal apology",
        "decorative soap nobody may use",
        "a spreadsheet of my regrets",
        "an unsolicited bagpipe solo",
        "the express lane, used incorrectly",
        "a haunted vending machine",
        "elevator small talk",
        "a trophy for participation",
        "an alarm clock set to 3:47",
        "the instruction manual, unread",
        "a conga line of one",
        "mystery leftovers from last month",
        "a pen that only writes uphill",
        "the group chat at 2 a.m.",
        "a map folded wrong forever",
        "an aggressively friendly mascot",
        "the wrong kind of confetti",
        "a plant named Gerald",
    ];
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| Card::new(i as CardId + 1, *t))
        .collect()
}

/// Built-in set of prompt templates paired with [`starter_responses`].
pub fn starter_templates() -> Vec<Template> {
    let texts = [
        "The secret ingredient is ____.",
        "Nothing ruins a road trip like ____.",
        "My autobiography will be titled ____.",
        "The museum's newest exhibit: ____.",
        "I knew the party was over when I saw ____.",
        "Next year's hottest gift is ____.",
        "The real reason I was late: ____.",
        "Science has finally explained ____.",
    ];
    texts.iter().map(|t| Template::new(*t)).collect()
}
