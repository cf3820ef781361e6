use core::fmt;
use serde::{Deserialize, Serialize};

/// A player's claim for the betting round. A skipped bet carries the
/// minimum amount as a placeholder; evaluators must ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub amount: u8,
    pub without_trump: bool,
    pub skipped: bool,
}

impl Bet {
    pub const MIN_AMOUNT: u8 = 7;
    pub const MAX_AMOUNT: u8 = 12;

    pub fn new(amount: u8, without_trump: bool) -> Self {
        Self {
            amount: Self::clamp_amount(amount),
            without_trump,
            skipped: false,
        }
    }

    pub const fn skip() -> Self {
        Self {
            amount: Self::MIN_AMOUNT,
            without_trump: false,
            skipped: true,
        }
    }

    pub const fn is_valid_bid(self) -> bool {
        !self.skipped
    }

    pub fn clamp_amount(amount: u8) -> u8 {
        amount.clamp(Self::MIN_AMOUNT, Self::MAX_AMOUNT)
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.skipped {
            f.write_str("skip")
        } else if self.without_trump {
            write!(f, "{} without trump", self.amount)
        } else {
            write!(f, "{}", self.amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Bet;

    #[test]
    fn amounts_are_clamped_to_range() {
        assert_eq!(Bet::new(3, false).amount, 7);
        assert_eq!(Bet::new(15, false).amount, 12);
        assert_eq!(Bet::new(9, false).amount, 9);
    }

    #[test]
    fn skip_is_not_a_valid_bid() {
        assert!(!Bet::skip().is_valid_bid());
        assert!(Bet::new(8, false).is_valid_bid());
    }

    #[test]
    fn display_marks_without_trump() {
        assert_eq!(Bet::new(10, true).to_string(), "10 without trump");
        assert_eq!(Bet::skip().to_string(), "skip");
    }
}
