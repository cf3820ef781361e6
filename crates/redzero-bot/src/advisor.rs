//! Human-facing move advice. Unlike the bot planners the advisor is
//! fully deterministic: the same snapshot always yields the same
//! suggestion, so the UI can re-render it freely.

use crate::bot::{BetPlanner, BotContext, BotDifficulty, HandBand, PlayPlanner, PlayTactic, StrategyConfig};
use redzero_core::eval::evaluate;
use redzero_core::model::bet::Bet;
use redzero_core::model::card::Card;
use redzero_core::model::snapshot::{GameStateSnapshot, Phase};
use redzero_core::rules::legal_moves;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BetSuggestion {
    pub amount: u8,
    pub without_trump: bool,
    pub skip: bool,
    pub reason: String,
    pub alternatives: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveSuggestion {
    pub card: Card,
    pub reason: String,
    pub priority: Priority,
    pub explanation: String,
    pub alternatives: Option<String>,
}

/// Betting advice for the named player, or `None` outside the betting
/// phase or when the player is absent from the snapshot.
pub fn suggest_bet(snapshot: &GameStateSnapshot, player_name: &str) -> Option<BetSuggestion> {
    if snapshot.phase != Phase::Betting {
        return None;
    }
    let (seat, player) = snapshot.player_by_name(player_name)?;

    let strength = evaluate(&player.hand, snapshot.trump);
    let estimate = strength.estimated_tricks;
    let band = HandBand::classify(estimate);
    let is_dealer = snapshot.is_dealer(seat);
    let highest = snapshot.highest_valid_bid();

    if estimate < 4.0 {
        if is_dealer && highest.is_none() {
            let amount = BetPlanner::dealer_opening_amount(estimate);
            return Some(BetSuggestion {
                amount,
                without_trump: false,
                skip: false,
                reason: format!(
                    "{band}, but as dealer you must open the betting. Bid {amount} and keep it minimal."
                ),
                alternatives: None,
            });
        }
        return Some(BetSuggestion {
            amount: Bet::MIN_AMOUNT,
            without_trump: false,
            skip: true,
            reason: format!(
                "{band}: roughly {estimate:.1} tricks. Sit this one out and let the others commit."
            ),
            alternatives: None,
        });
    }

    let mut amount = HandBand::target_amount(estimate);
    let mut alternatives = None;

    if let Some(highest) = highest {
        let minimum = if is_dealer {
            highest
        } else {
            highest.saturating_add(1)
        };
        if minimum > Bet::MAX_AMOUNT {
            return Some(BetSuggestion {
                amount: Bet::MIN_AMOUNT,
                without_trump: false,
                skip: true,
                reason: format!(
                    "The table is already at {highest} and cannot be outbid. Skip."
                ),
                alternatives: None,
            });
        }
        if amount < minimum {
            if is_dealer {
                alternatives = Some(format!(
                    "Your hand only supports {amount}, but dealers win ties. Equalizing at {minimum} is a stretch worth weighing."
                ));
                amount = minimum;
            } else {
                return Some(BetSuggestion {
                    amount: Bet::MIN_AMOUNT,
                    without_trump: false,
                    skip: true,
                    reason: format!(
                        "{band}: about {estimate:.1} tricks supports a bid of {amount}, but you would need {minimum} to overcall. Skip."
                    ),
                    alternatives: None,
                });
            }
        }
    }

    let trump = snapshot.trump.or(strength.optimal_trump);
    let trump_text = trump.map_or_else(|| "no".to_string(), |color| color.to_string());
    let dominant_count = strength
        .dominant_color
        .map_or(0, |color| strength.color_distribution[color.index()]);
    let without_trump = dominant_count >= 6 && strength.has_seven_in_dominant;

    if without_trump {
        alternatives = Some(format!(
            "A {dominant_count}-card run topped by the 7 could carry a without-trump contract for double the stakes."
        ));
    }

    Some(BetSuggestion {
        amount,
        without_trump,
        skip: false,
        reason: format!(
            "{band}: about {estimate:.1} tricks with {trump_text} trump ({} trump cards).",
            strength.trump_count
        ),
        alternatives,
    })
}

/// Card advice for the named player, or `None` outside the playing
/// phase, when the player is absent, when it is not their turn, or
/// when their hand is empty.
pub fn suggest_move(snapshot: &GameStateSnapshot, player_name: &str) -> Option<MoveSuggestion> {
    if snapshot.phase != Phase::Playing {
        return None;
    }
    let (seat, player) = snapshot.player_by_name(player_name)?;
    if seat != snapshot.active_player_index {
        return None;
    }

    let legal = legal_moves(&player.hand, &snapshot.current_trick);
    if legal.is_empty() {
        return None;
    }

    let config = StrategyConfig::for_difficulty(BotDifficulty::Hard);
    let ctx = BotContext::new(snapshot, seat, &config)?;
    let decision = PlayPlanner::tactical(&ctx, &legal, &HashSet::new());
    let card = decision.card;

    let (priority, reason, explanation) = match decision.tactic {
        PlayTactic::ForcedOnly => (
            Priority::High,
            "Only legal card".to_string(),
            format!("{card} is the only card you are allowed to play here."),
        ),
        PlayTactic::LeadTrump => (
            Priority::Medium,
            "Bleed their trump".to_string(),
            format!(
                "Leading {card} forces the opponents to spend trump now, so your high side cards run later."
            ),
        ),
        PlayTactic::LeadRedZero => (
            Priority::Low,
            "Launch the Red Zero".to_string(),
            format!(
                "With the hand nearly empty, leading {card} gives your partner one last chance to capture the +5."
            ),
        ),
        PlayTactic::LeadLong => (
            Priority::Low,
            "Lead from length".to_string(),
            format!(
                "{card} heads your longest color; pressing it early keeps control of the trick."
            ),
        ),
        PlayTactic::RedZeroOnPartner => (
            Priority::High,
            "Feed your partner the Red Zero".to_string(),
            format!(
                "Your partner's card cannot be beaten, so {card} banks the +5 bonus for your team."
            ),
        ),
        PlayTactic::SupportPartnerLow => (
            Priority::Medium,
            "Partner has it, stay cheap".to_string(),
            format!(
                "Your partner is winning the trick; {card} keeps your stronger cards for later."
            ),
        ),
        PlayTactic::GuaranteedWin => (
            Priority::High,
            "Sure winner".to_string(),
            format!("{card} cannot be beaten by anything still unaccounted for."),
        ),
        PlayTactic::PossibleWin => (
            Priority::Medium,
            "Best shot at the trick".to_string(),
            format!(
                "{card} beats everything on the table, though a higher card may still appear."
            ),
        ),
        PlayTactic::TakeRedZeroTrick => (
            Priority::High,
            "The Red Zero is on the table".to_string(),
            format!(
                "This trick carries the +5 bonus; {card} is your strongest claim on it."
            ),
        ),
        PlayTactic::PoisonWithBrownZero => (
            Priority::High,
            "Poison their trick".to_string(),
            format!(
                "You cannot win this trick, so {card} hands the winner the -2 penalty instead."
            ),
        ),
        PlayTactic::DuckLow => (
            Priority::Low,
            "Duck it".to_string(),
            format!("This trick is lost; {card} gives away as little as possible."),
        ),
    };

    let alternatives = if legal.len() > 1 && decision.tactic == PlayTactic::PossibleWin {
        legal
            .iter()
            .copied()
            .filter(|&other| other != card)
            .min_by_key(|other| (other.value, other.color.index()))
            .map(|low| format!("If you would rather save strength, {low} concedes the trick cheaply."))
    } else {
        None
    };

    Some(MoveSuggestion {
        card,
        reason,
        priority,
        explanation,
        alternatives,
    })
}
