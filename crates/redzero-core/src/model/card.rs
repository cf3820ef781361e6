use crate::model::color::Color;
use crate::model::value::Value;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub value: Value,
}

impl Card {
    pub const fn new(color: Color, value: Value) -> Self {
        Self { color, value }
    }

    /// The red/0 card, worth +5 points to the side winning its trick.
    pub const fn is_red_zero(self) -> bool {
        matches!(self.color, Color::Red) && matches!(self.value, Value::Zero)
    }

    /// The brown/0 card, worth -2 points to the side winning its trick.
    pub const fn is_brown_zero(self) -> bool {
        matches!(self.color, Color::Brown) && matches!(self.value, Value::Zero)
    }

    pub const fn bonus_points(self) -> i8 {
        if self.is_red_zero() {
            5
        } else if self.is_brown_zero() {
            -2
        } else {
            0
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Color, Value};

    #[test]
    fn red_zero_identified() {
        let card = Card::new(Color::Red, Value::Zero);
        assert!(card.is_red_zero());
        assert!(!card.is_brown_zero());
        assert_eq!(card.bonus_points(), 5);
    }

    #[test]
    fn brown_zero_is_a_penalty() {
        let card = Card::new(Color::Brown, Value::Zero);
        assert!(card.is_brown_zero());
        assert_eq!(card.bonus_points(), -2);
    }

    #[test]
    fn regular_card_carries_no_bonus() {
        let card = Card::new(Color::Green, Value::Seven);
        assert_eq!(card.bonus_points(), 0);
        assert_eq!(card.to_string(), "green 7");
    }
}
