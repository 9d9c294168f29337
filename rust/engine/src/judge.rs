use std::collections::HashMap;

use crate::player::PlayerId;

#[cfg(test)]
use mockall::automock;

/// Owner of the judge-rotation policy. After `pick_new_judge` the current
/// judge is always a member of the supplied roster.
#[cfg_attr(test, automock)]
pub trait JudgePicker {
    /// Judge of the current round; `None` before the first round.
    fn current_judge_id(&self) -> Option<PlayerId>;
    /// Selects the next judge from the given roster.
    fn pick_new_judge(&mut self, players: &[PlayerId]);
}

/// Rotates the judge role through the roster: whoever has waited longest
/// judges next, never-judged players first. Ties break on the smaller id
/// so rotation is deterministic.
#[derive(Debug, Default)]
pub struct RotatingJudgePicker {
    current: Option<PlayerId>,
    last_served: HashMap<PlayerId, u64>,
    rounds: u64,
}

impl RotatingJudgePicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JudgePicker for RotatingJudgePicker {
    fn current_judge_id(&self) -> Option<PlayerId> {
        self.current
    }

    fn pick_new_judge(&mut self, players: &[PlayerId]) {
        let next = players
            .iter()
            .copied()
            .min_by_key(|p| (self.last_served.get(p).copied().unwrap_or(0), *p));
        if let Some(judge) = next {
            self.rounds += 1;
            self.last_served.insert(judge, self.rounds);
            self.current = Some(judge);
        }
    }
}
