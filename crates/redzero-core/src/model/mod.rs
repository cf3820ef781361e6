pub mod bet;
pub mod card;
pub mod color;
pub mod hand;
pub mod player;
pub mod snapshot;
pub mod trick;
pub mod value;
