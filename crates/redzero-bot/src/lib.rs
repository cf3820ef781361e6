pub mod advisor;
pub mod bot;
pub mod engine;

pub use advisor::{BetSuggestion, MoveSuggestion, Priority};
pub use bot::{
    BetPlanner, BotContext, BotDifficulty, CardMemory, HandBand, PlayPlanner, StrategyConfig,
};
pub use engine::Engine;
