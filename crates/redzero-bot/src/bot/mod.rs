mod bet;
mod memory;
mod play;

pub use bet::{BetPlanner, HandBand};
pub use memory::CardMemory;
pub use play::{PlayDecision, PlayPlanner, PlayTactic};

use redzero_core::model::color::Color;
use redzero_core::model::hand::Hand;
use redzero_core::model::player::{PlayerState, Team};
use redzero_core::model::snapshot::GameStateSnapshot;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDifficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for BotDifficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl BotDifficulty {
    pub fn from_env() -> Self {
        static CACHED: OnceLock<BotDifficulty> = OnceLock::new();
        *CACHED.get_or_init(|| match std::env::var("RZ_BOT_DIFFICULTY") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "easy" => BotDifficulty::Easy,
                "medium" => BotDifficulty::Medium,
                "normal" => BotDifficulty::Medium,
                "hard" => BotDifficulty::Hard,
                _ => BotDifficulty::default(),
            },
            Err(_) => BotDifficulty::default(),
        })
    }
}

/// Tuning for one bot. Always passed as an explicit value so that
/// several games with different difficulties can run in one process.
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    pub difficulty: BotDifficulty,
    /// Chance a weak hand still skips the betting round.
    pub skip_probability: f64,
    /// Chance an eligible hand goes without trump (doubles stakes).
    pub without_trump_probability: f64,
    /// Estimated tricks below which the hand counts as weak.
    pub skip_threshold: f64,
    /// Pacing hint for the caller; carries no scheduling semantics here.
    pub delay_ms: RangeInclusive<u64>,
}

impl StrategyConfig {
    pub fn for_difficulty(difficulty: BotDifficulty) -> Self {
        match difficulty {
            BotDifficulty::Easy => Self {
                difficulty,
                skip_probability: 0.40,
                without_trump_probability: 0.10,
                skip_threshold: 4.5,
                delay_ms: 900..=2200,
            },
            BotDifficulty::Medium => Self {
                difficulty,
                skip_probability: 0.25,
                without_trump_probability: 0.25,
                skip_threshold: 4.0,
                delay_ms: 600..=1600,
            },
            BotDifficulty::Hard => Self {
                difficulty,
                skip_probability: 0.15,
                without_trump_probability: 0.45,
                skip_threshold: 4.0,
                delay_ms: 400..=1200,
            },
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::for_difficulty(BotDifficulty::default())
    }
}

/// Per-decision view over the snapshot for one acting player.
#[derive(Clone, Copy)]
pub struct BotContext<'a> {
    pub snapshot: &'a GameStateSnapshot,
    pub seat: usize,
    pub player: &'a PlayerState,
    pub config: &'a StrategyConfig,
}

impl<'a> BotContext<'a> {
    pub fn new(
        snapshot: &'a GameStateSnapshot,
        seat: usize,
        config: &'a StrategyConfig,
    ) -> Option<Self> {
        let player = snapshot.players.get(seat)?;
        Some(Self {
            snapshot,
            seat,
            player,
            config,
        })
    }

    pub fn hand(&self) -> &'a Hand {
        &self.player.hand
    }

    pub fn trump(&self) -> Option<Color> {
        self.snapshot.trump
    }

    pub fn is_dealer(&self) -> bool {
        self.snapshot.is_dealer(self.seat)
    }

    pub fn my_team(&self) -> Team {
        self.player.team
    }

    /// Whether the play currently winning the trick belongs to this
    /// player's partner.
    pub fn partner_winning(&self) -> bool {
        let Some(winner) = self.snapshot.current_trick.winning_play(self.trump()) else {
            return false;
        };
        if winner.player == self.player.id {
            return false;
        }
        self.snapshot.team_of(&winner.player) == Some(self.my_team())
    }
}

#[cfg(test)]
mod tests {
    use super::{BotContext, BotDifficulty, StrategyConfig};
    use redzero_core::model::card::Card;
    use redzero_core::model::color::Color;
    use redzero_core::model::hand::Hand;
    use redzero_core::model::player::{PlayerState, select_team};
    use redzero_core::model::snapshot::{GameStateSnapshot, Phase};
    use redzero_core::model::trick::Trick;
    use redzero_core::model::value::Value;

    fn card(color: Color, value: u8) -> Card {
        Card::new(color, Value::from_raw(value).unwrap())
    }

    fn build_snapshot() -> GameStateSnapshot {
        let players = (0..4)
            .map(|seat| PlayerState {
                id: format!("p{seat}"),
                name: format!("Player {seat}"),
                hand: Hand::new(),
                team: select_team(seat),
            })
            .collect();
        GameStateSnapshot {
            game_id: "game-1".to_string(),
            phase: Phase::Playing,
            trump: Some(Color::Green),
            players,
            current_trick: Trick::new(),
            previous_trick: None,
            bets: vec![None; 4],
            dealer_index: 0,
            active_player_index: 2,
        }
    }

    #[test]
    fn config_scales_with_difficulty() {
        let easy = StrategyConfig::for_difficulty(BotDifficulty::Easy);
        let hard = StrategyConfig::for_difficulty(BotDifficulty::Hard);
        assert!(easy.skip_probability > hard.skip_probability);
        assert!(easy.without_trump_probability < hard.without_trump_probability);
        assert!(easy.delay_ms.end() > hard.delay_ms.end());
    }

    #[test]
    fn context_rejects_out_of_range_seats() {
        let snapshot = build_snapshot();
        let config = StrategyConfig::default();
        assert!(BotContext::new(&snapshot, 4, &config).is_none());
        assert!(BotContext::new(&snapshot, 2, &config).is_some());
    }

    #[test]
    fn partner_winning_tracks_the_trick() {
        let mut snapshot = build_snapshot();
        snapshot
            .current_trick
            .push("p0", card(Color::Blue, 5))
            .unwrap();
        snapshot
            .current_trick
            .push("p1", card(Color::Blue, 3))
            .unwrap();
        let config = StrategyConfig::default();

        // Seat 2 partners seat 0, whose blue 5 is winning.
        let ctx = BotContext::new(&snapshot, 2, &config).unwrap();
        assert!(ctx.partner_winning());

        let ctx = BotContext::new(&snapshot, 3, &config).unwrap();
        assert!(!ctx.partner_winning());
    }
}
