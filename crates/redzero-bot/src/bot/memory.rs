use redzero_core::model::card::Card;
use redzero_core::model::trick::Trick;
use std::collections::{HashMap, HashSet};

/// Cards observed on the table, per game. Snapshots overlap between
/// decisions, so observation is idempotent; the ledger must be cleared
/// when a game ends or its key leaks forever.
#[derive(Debug, Default)]
pub struct CardMemory {
    seen: HashMap<String, HashSet<Card>>,
}

impl CardMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every card visible in the current trick and, when the
    /// server still exposes it, the trick that was just swept.
    pub fn observe(&mut self, game_id: &str, current: &Trick, previous: Option<&Trick>) {
        if current.is_empty() && previous.is_none_or(Trick::is_empty) {
            return;
        }
        let ledger = self.seen.entry(game_id.to_string()).or_default();
        ledger.extend(current.cards());
        if let Some(trick) = previous {
            ledger.extend(trick.cards());
        }
    }

    pub fn seen(&self, game_id: &str) -> Option<&HashSet<Card>> {
        self.seen.get(game_id)
    }

    pub fn clear(&mut self, game_id: &str) {
        self.seen.remove(game_id);
    }

    pub fn tracked_games(&self) -> usize {
        self.seen.len()
    }
}
