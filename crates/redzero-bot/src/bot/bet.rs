use super::{BotDifficulty, StrategyConfig};
use core::fmt;
use rand::Rng;
use redzero_core::eval::HandStrength;
use redzero_core::model::bet::Bet;

/// Closed classification of a hand's betting strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandBand {
    Weak,
    Marginal,
    Decent,
    Good,
    Strong,
    Excellent,
}

impl HandBand {
    pub fn classify(estimated_tricks: f64) -> Self {
        if estimated_tricks < 4.0 {
            HandBand::Weak
        } else if estimated_tricks < 5.0 {
            HandBand::Marginal
        } else if estimated_tricks < 6.0 {
            HandBand::Decent
        } else if estimated_tricks < 7.0 {
            HandBand::Good
        } else if estimated_tricks < 8.0 {
            HandBand::Strong
        } else {
            HandBand::Excellent
        }
    }

    /// Bid amount the estimate supports, clamped to the 7-12 range.
    pub fn target_amount(estimated_tricks: f64) -> u8 {
        let rounded = estimated_tricks.round().max(0.0) as i32;
        (rounded + 3).clamp(Bet::MIN_AMOUNT as i32, Bet::MAX_AMOUNT as i32) as u8
    }
}

impl fmt::Display for HandBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HandBand::Weak => "Weak hand",
            HandBand::Marginal => "Marginal hand",
            HandBand::Decent => "Decent hand",
            HandBand::Good => "Good hand, HARD to beat",
            HandBand::Strong => "Strong hand, VERY HARD to beat",
            HandBand::Excellent => "Excellent hand, VERY HARD to beat",
        };
        f.write_str(text)
    }
}

pub struct BetPlanner;

impl BetPlanner {
    /// Decide one bet. Policy order: dealer obligation, weak-hand
    /// skip, tier-specific target amount, raise constraint,
    /// without-trump eligibility.
    pub fn choose(
        strength: &HandStrength,
        is_dealer: bool,
        highest_bid: Option<u8>,
        config: &StrategyConfig,
        rng: &mut impl Rng,
    ) -> Bet {
        let estimate = strength.estimated_tricks;

        // The dealer must open when nobody has made a valid bid yet.
        if is_dealer && highest_bid.is_none() {
            return Bet::new(Self::dealer_opening_amount(estimate), false);
        }

        if estimate < config.skip_threshold
            && !is_dealer
            && rng.gen_bool(config.skip_probability)
        {
            return Bet::skip();
        }

        let mut amount = match config.difficulty {
            // Deliberately weak play: the hand barely matters.
            BotDifficulty::Easy => rng.gen_range(7..=10),
            BotDifficulty::Medium => {
                let jitter: i32 = rng.gen_range(-1..=1);
                (HandBand::target_amount(estimate) as i32 + jitter)
                    .clamp(Bet::MIN_AMOUNT as i32, Bet::MAX_AMOUNT as i32) as u8
            }
            BotDifficulty::Hard => HandBand::target_amount(estimate),
        };

        if let Some(highest) = highest_bid {
            // Non-dealers must raise; the dealer wins ties and may
            // therefore equalize the contract.
            let minimum = if is_dealer {
                highest
            } else {
                highest.saturating_add(1)
            };
            if minimum > Bet::MAX_AMOUNT {
                return Bet::skip();
            }
            if amount < minimum {
                if is_dealer {
                    amount = minimum;
                } else {
                    return Bet::skip();
                }
            }
        }

        let without_trump = Self::wants_without_trump(strength, config, rng);
        Bet::new(amount, without_trump)
    }

    /// Forced opening: minimum 7, scaled toward the estimate, capped
    /// at 9 so a forced dealer never overcommits.
    pub fn dealer_opening_amount(estimate: f64) -> u8 {
        (estimate.round().max(0.0) as u8).clamp(Bet::MIN_AMOUNT, 9)
    }

    fn wants_without_trump(
        strength: &HandStrength,
        config: &StrategyConfig,
        rng: &mut impl Rng,
    ) -> bool {
        let Some(dominant) = strength.dominant_color else {
            return false;
        };
        let dominant_count = strength.color_distribution[dominant.index()];
        if dominant_count < 5 || !strength.has_seven_in_dominant {
            return false;
        }
        let probability = if dominant_count >= 6 {
            config.without_trump_probability
        } else {
            config.without_trump_probability * 0.5
        };
        rng.gen_bool(probability)
    }
}
