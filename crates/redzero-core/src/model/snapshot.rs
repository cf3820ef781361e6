use crate::model::bet::Bet;
use crate::model::color::Color;
use crate::model::player::{PlayerState, Team};
use crate::model::trick::Trick;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Betting,
    Playing,
    #[serde(other)]
    Other,
}

/// Read-only view of one game as handed over by the game server. The
/// engine never mutates it and never receives deltas, only full
/// snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub game_id: String,
    pub phase: Phase,
    /// `None` only while betting is still open (or for a without-trump
    /// contract).
    pub trump: Option<Color>,
    pub players: Vec<PlayerState>,
    pub current_trick: Trick,
    pub previous_trick: Option<Trick>,
    /// One slot per player, `None` until that player has acted.
    pub bets: Vec<Option<Bet>>,
    pub dealer_index: usize,
    pub active_player_index: usize,
}

impl GameStateSnapshot {
    pub fn player_by_id(&self, id: &str) -> Option<(usize, &PlayerState)> {
        self.players
            .iter()
            .enumerate()
            .find(|(_, player)| player.id == id)
    }

    pub fn player_by_name(&self, name: &str) -> Option<(usize, &PlayerState)> {
        self.players
            .iter()
            .enumerate()
            .find(|(_, player)| player.name == name)
    }

    pub fn is_dealer(&self, seat: usize) -> bool {
        seat == self.dealer_index
    }

    /// Highest non-skipped bid on the table, if any. Skipped bets carry
    /// a placeholder amount and are ignored here.
    pub fn highest_valid_bid(&self) -> Option<u8> {
        self.bets
            .iter()
            .flatten()
            .filter(|bet| bet.is_valid_bid())
            .map(|bet| bet.amount)
            .max()
    }

    pub fn team_of(&self, player_id: &str) -> Option<Team> {
        self.player_by_id(player_id).map(|(_, player)| player.team)
    }
}
