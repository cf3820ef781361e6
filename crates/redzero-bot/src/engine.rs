use crate::advisor::{self, BetSuggestion, MoveSuggestion};
use crate::bot::{BetPlanner, BotContext, BotDifficulty, CardMemory, PlayPlanner, StrategyConfig};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use redzero_core::eval::evaluate;
use redzero_core::model::bet::Bet;
use redzero_core::model::card::Card;
use redzero_core::model::snapshot::{GameStateSnapshot, Phase};
use tracing::{Level, event};

/// One bot instance: its tuning, its card memory, and its RNG. A host
/// process runs one `Engine` per bot seat; nothing here is shared or
/// global, so concurrent games cannot contaminate each other.
pub struct Engine {
    config: StrategyConfig,
    memory: CardMemory,
    rng: SmallRng,
}

impl Engine {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            memory: CardMemory::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic construction for tests and replays.
    pub fn from_seed(config: StrategyConfig, seed: u64) -> Self {
        Self {
            config,
            memory: CardMemory::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Decide a bet for the given player. A missing player or a
    /// snapshot outside the betting phase yields a skip; a misplaced
    /// call must never break the hosting game loop.
    pub fn make_bet(&mut self, snapshot: &GameStateSnapshot, player_id: &str) -> Bet {
        if snapshot.phase != Phase::Betting {
            return Bet::skip();
        }
        let Some((seat, player)) = snapshot.player_by_id(player_id) else {
            return Bet::skip();
        };

        let strength = evaluate(&player.hand, snapshot.trump);
        let bet = BetPlanner::choose(
            &strength,
            snapshot.is_dealer(seat),
            snapshot.highest_valid_bid(),
            &self.config,
            &mut self.rng,
        );

        if tracing::enabled!(target: "redzero_bot::bet", Level::INFO) {
            event!(
                target: "redzero_bot::bet",
                Level::INFO,
                game = %snapshot.game_id,
                player = %player_id,
                estimate = strength.estimated_tricks,
                amount = bet.amount,
                without_trump = bet.without_trump,
                skipped = bet.skipped,
                "bet decided"
            );
        }
        bet
    }

    /// Pick a card for the given player, or `None` when the player is
    /// missing or holds no legal card. The hard tier folds the table
    /// into its per-game seen-card ledger before deciding.
    pub fn play_card(&mut self, snapshot: &GameStateSnapshot, player_id: &str) -> Option<Card> {
        let (seat, _) = snapshot.player_by_id(player_id)?;

        if self.config.difficulty == BotDifficulty::Hard {
            self.memory.observe(
                &snapshot.game_id,
                &snapshot.current_trick,
                snapshot.previous_trick.as_ref(),
            );
        }

        let ctx = BotContext::new(snapshot, seat, &self.config)?;
        let seen = self.memory.seen(&snapshot.game_id);
        let card = PlayPlanner::choose(&ctx, seen, &mut self.rng)?;

        if tracing::enabled!(target: "redzero_bot::play", Level::INFO) {
            event!(
                target: "redzero_bot::play",
                Level::INFO,
                game = %snapshot.game_id,
                player = %player_id,
                card = %card,
                "card chosen"
            );
        }
        Some(card)
    }

    pub fn suggest_bet(
        &self,
        snapshot: &GameStateSnapshot,
        player_name: &str,
    ) -> Option<BetSuggestion> {
        advisor::suggest_bet(snapshot, player_name)
    }

    pub fn suggest_move(
        &self,
        snapshot: &GameStateSnapshot,
        player_name: &str,
    ) -> Option<MoveSuggestion> {
        advisor::suggest_move(snapshot, player_name)
    }

    /// Milliseconds the host should wait before surfacing this bot's
    /// action, so play does not feel instantaneous.
    pub fn action_delay(&mut self) -> u64 {
        self.rng.gen_range(self.config.delay_ms.clone())
    }

    /// Callers must invoke this when a game ends; the seen-card ledger
    /// is keyed by game id and is never dropped implicitly.
    pub fn clear_memory(&mut self, game_id: &str) {
        self.memory.clear(game_id);
    }

    #[cfg(test)]
    pub(crate) fn tracked_games(&self) -> usize {
        self.memory.tracked_games()
    }
}

#[cfg(test)]
mod tests {
    use super::Engine;
    use crate::bot::{BotDifficulty, StrategyConfig};
    use redzero_core::model::card::Card;
    use redzero_core::model::color::Color;
    use redzero_core::model::hand::Hand;
    use redzero_core::model::player::{PlayerState, select_team};
    use redzero_core::model::snapshot::{GameStateSnapshot, Phase};
    use redzero_core::model::trick::Trick;
    use redzero_core::model::value::Value;
    use redzero_core::rules::legal_moves;

    fn card(color: Color, value: u8) -> Card {
        Card::new(color, Value::from_raw(value).unwrap())
    }

    fn snapshot_with_hand(seat: usize, cards: Vec<Card>, phase: Phase) -> GameStateSnapshot {
        let players = (0..4)
            .map(|index| PlayerState {
                id: format!("p{index}"),
                name: format!("Player {index}"),
                hand: if index == seat {
                    Hand::with_cards(cards.clone())
                } else {
                    Hand::new()
                },
                team: select_team(index),
            })
            .collect();
        GameStateSnapshot {
            game_id: "game-1".to_string(),
            phase,
            trump: Some(Color::Green),
            players,
            current_trick: Trick::new(),
            previous_trick: None,
            bets: vec![None; 4],
            dealer_index: 0,
            active_player_index: seat,
        }
    }

    fn hard_engine(seed: u64) -> Engine {
        Engine::from_seed(StrategyConfig::for_difficulty(BotDifficulty::Hard), seed)
    }

    #[test]
    fn missing_player_degrades_to_skip_and_none() {
        let mut engine = hard_engine(1);
        let mut snapshot = snapshot_with_hand(0, vec![card(Color::Red, 5)], Phase::Betting);
        snapshot.trump = None;
        let bet = engine.make_bet(&snapshot, "ghost");
        assert!(bet.skipped);
        assert_eq!(bet.amount, 7);

        snapshot.phase = Phase::Playing;
        assert_eq!(engine.play_card(&snapshot, "ghost"), None);
    }

    #[test]
    fn betting_outside_the_phase_is_a_skip() {
        let mut engine = hard_engine(1);
        let snapshot = snapshot_with_hand(0, vec![card(Color::Red, 5)], Phase::Playing);
        assert!(engine.make_bet(&snapshot, "p0").skipped);
    }

    #[test]
    fn played_card_is_always_legal() {
        let mut engine = hard_engine(9);
        let mut snapshot = snapshot_with_hand(
            1,
            vec![
                card(Color::Blue, 2),
                card(Color::Blue, 6),
                card(Color::Red, 4),
            ],
            Phase::Playing,
        );
        snapshot
            .current_trick
            .push("p0", card(Color::Blue, 4))
            .unwrap();
        let legal = legal_moves(&snapshot.players[1].hand, &snapshot.current_trick);
        let chosen = engine.play_card(&snapshot, "p1").unwrap();
        assert!(legal.contains(&chosen));
    }

    #[test]
    fn empty_hand_plays_nothing() {
        let mut engine = hard_engine(2);
        let snapshot = snapshot_with_hand(2, vec![], Phase::Playing);
        assert_eq!(engine.play_card(&snapshot, "p2"), None);
    }

    #[test]
    fn hard_engine_accumulates_and_clears_memory() {
        let mut engine = hard_engine(3);
        let mut snapshot = snapshot_with_hand(1, vec![card(Color::Blue, 2)], Phase::Playing);
        snapshot
            .current_trick
            .push("p0", card(Color::Red, 6))
            .unwrap();
        engine.play_card(&snapshot, "p1");
        assert_eq!(engine.tracked_games(), 1);
        engine.clear_memory("game-1");
        assert_eq!(engine.tracked_games(), 0);
    }

    #[test]
    fn easy_engine_keeps_no_memory() {
        let mut engine =
            Engine::from_seed(StrategyConfig::for_difficulty(BotDifficulty::Easy), 4);
        let mut snapshot = snapshot_with_hand(1, vec![card(Color::Blue, 2)], Phase::Playing);
        snapshot
            .current_trick
            .push("p0", card(Color::Red, 6))
            .unwrap();
        engine.play_card(&snapshot, "p1");
        assert_eq!(engine.tracked_games(), 0);
    }

    #[test]
    fn action_delay_stays_in_the_configured_range() {
        let mut engine = hard_engine(5);
        let range = engine.config().delay_ms.clone();
        for _ in 0..32 {
            assert!(range.contains(&engine.action_delay()));
        }
    }

    #[test]
    fn seeded_engines_replay_identically() {
        let snapshot = snapshot_with_hand(
            0,
            vec![
                card(Color::Red, 1),
                card(Color::Red, 2),
                card(Color::Green, 1),
                card(Color::Blue, 1),
            ],
            Phase::Betting,
        );
        let mut snapshot = snapshot;
        snapshot.trump = None;
        let first = {
            let mut engine = Engine::from_seed(StrategyConfig::default(), 42);
            engine.make_bet(&snapshot, "p0")
        };
        let second = {
            let mut engine = Engine::from_seed(StrategyConfig::default(), 42);
            engine.make_bet(&snapshot, "p0")
        };
        assert_eq!(first.amount, second.amount);
        assert_eq!(first.skipped, second.skipped);
        assert_eq!(first.without_trump, second.without_trump);
    }
}
