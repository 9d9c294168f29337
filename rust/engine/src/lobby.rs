use crate::player::PlayerId;

#[cfg(test)]
use mockall::automock;

/// Default minimum roster size required to start a round: the judge plus
/// at least two competing players.
pub const MIN_PLAYERS: usize = 3;

/// Owner of the roster and the start-authorization policy.
#[cfg_attr(test, automock)]
pub trait Lobby {
    /// The single identity authorized to start a round.
    fn owner_id(&self) -> PlayerId;
    /// Headcount threshold policy.
    fn has_enough_players(&self) -> bool;
    /// Current roster, owner included.
    fn players(&self) -> Vec<PlayerId>;
}

/// In-memory lobby: the owner plus whoever has joined.
/// Membership churn is driven by the surrounding session layer.
#[derive(Debug)]
pub struct PartyLobby {
    owner: PlayerId,
    players: Vec<PlayerId>,
    min_players: usize,
}

impl PartyLobby {
    pub fn new(owner: PlayerId) -> Self {
        Self::with_min_players(owner, MIN_PLAYERS)
    }

    pub fn with_min_players(owner: PlayerId, min_players: usize) -> Self {
        Self {
            owner,
            players: vec![owner],
            min_players,
        }
    }

    pub fn add_player(&mut self, player: PlayerId) {
        if !self.players.contains(&player) {
            self.players.push(player);
        }
    }

    /// Removes a player from the roster. The owner cannot leave their own
    /// lobby; disbanding is handled outside the core.
    pub fn remove_player(&mut self, player: PlayerId) {
        if player != self.owner {
            self.players.retain(|p| *p != player);
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Lobby for PartyLobby {
    fn owner_id(&self) -> PlayerId {
        self.owner
    }

    fn has_enough_players(&self) -> bool {
        self.players.len() >= self.min_players
    }

    fn players(&self) -> Vec<PlayerId> {
        self.players.clone()
    }
}
