use super::{BotContext, BotDifficulty};
use rand::Rng;
use redzero_core::model::card::Card;
use redzero_core::model::color::Color;
use redzero_core::rules::legal_moves;
use redzero_core::model::trick::{can_beat, is_guaranteed_win};
use std::collections::HashSet;

/// Why a card was chosen; drives the advisor's priority and prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayTactic {
    ForcedOnly,
    LeadTrump,
    LeadRedZero,
    LeadLong,
    RedZeroOnPartner,
    SupportPartnerLow,
    GuaranteedWin,
    PossibleWin,
    TakeRedZeroTrick,
    PoisonWithBrownZero,
    DuckLow,
}

#[derive(Debug, Clone, Copy)]
pub struct PlayDecision {
    pub card: Card,
    pub tactic: PlayTactic,
}

pub struct PlayPlanner;

impl PlayPlanner {
    /// Pick one card from the acting player's legal moves, or `None`
    /// when the hand is empty. Every tier goes through the legal-move
    /// filter first; difficulty only changes how well the position is
    /// read.
    pub fn choose(
        ctx: &BotContext<'_>,
        seen: Option<&HashSet<Card>>,
        rng: &mut impl Rng,
    ) -> Option<Card> {
        let legal = legal_moves(ctx.hand(), &ctx.snapshot.current_trick);
        if legal.is_empty() {
            return None;
        }
        if legal.len() == 1 {
            return Some(legal[0]);
        }

        let card = match ctx.config.difficulty {
            BotDifficulty::Easy => Self::casual(&legal, ctx, rng),
            BotDifficulty::Medium => {
                if rng.gen_bool(0.7) {
                    Self::tactical(ctx, &legal, &HashSet::new()).card
                } else {
                    Self::casual(&legal, ctx, rng)
                }
            }
            BotDifficulty::Hard => {
                let empty = HashSet::new();
                Self::tactical(ctx, &legal, seen.unwrap_or(&empty)).card
            }
        };
        Some(card)
    }

    /// Near-random play with a soft preference for shedding the Brown
    /// Zero onto someone else's trick.
    fn casual(legal: &[Card], ctx: &BotContext<'_>, rng: &mut impl Rng) -> Card {
        if !ctx.snapshot.current_trick.is_empty() {
            if let Some(brown) = legal.iter().copied().find(|card| card.is_brown_zero()) {
                if rng.gen_bool(0.5) {
                    return brown;
                }
            }
        }
        legal[rng.gen_range(0..legal.len())]
    }

    /// Deterministic positional reasoning shared by the hard tier and
    /// the advisor. First-match ordering keeps ties stable.
    pub fn tactical(ctx: &BotContext<'_>, legal: &[Card], seen: &HashSet<Card>) -> PlayDecision {
        debug_assert!(!legal.is_empty());
        if legal.len() == 1 {
            return PlayDecision {
                card: legal[0],
                tactic: PlayTactic::ForcedOnly,
            };
        }

        let trick = &ctx.snapshot.current_trick;
        let trump = ctx.trump();
        if trick.is_empty() {
            return Self::lead(ctx, legal);
        }

        let Some(winner) = trick.winning_play(trump) else {
            return Self::lead(ctx, legal);
        };
        let winning_card = winner.card;

        if ctx.partner_winning() {
            // Feed the Red Zero to the partner only when their card
            // provably holds the trick.
            if let Some(red) = legal.iter().copied().find(|card| card.is_red_zero()) {
                if is_guaranteed_win(winning_card, trick, trump, seen) {
                    return PlayDecision {
                        card: red,
                        tactic: PlayTactic::RedZeroOnPartner,
                    };
                }
            }
            let card = Self::lowest_protecting(legal, true)
                .unwrap_or_else(|| Self::lowest(legal).unwrap_or(legal[0]));
            return PlayDecision {
                card,
                tactic: PlayTactic::SupportPartnerLow,
            };
        }

        let beating: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|&card| can_beat(card, winning_card, trump))
            .collect();

        if !beating.is_empty() {
            let guaranteed: Vec<Card> = beating
                .iter()
                .copied()
                .filter(|&card| is_guaranteed_win(card, trick, trump, seen))
                .collect();

            // A trick carrying the Red Zero is worth winning at any
            // cost: take the sure win, else commit the strongest card.
            if trick.contains_red_zero() {
                let card = Self::lowest(&guaranteed)
                    .or_else(|| Self::highest(&beating))
                    .unwrap_or(legal[0]);
                return PlayDecision {
                    card,
                    tactic: PlayTactic::TakeRedZeroTrick,
                };
            }

            if let Some(card) = Self::lowest(&guaranteed) {
                return PlayDecision {
                    card,
                    tactic: PlayTactic::GuaranteedWin,
                };
            }
            if let Some(card) = Self::lowest(&beating) {
                return PlayDecision {
                    card,
                    tactic: PlayTactic::PossibleWin,
                };
            }
        }

        // Cannot win. Poisoning an opponent's trick with the Brown
        // Zero turns their win into a -2.
        if let Some(brown) = legal.iter().copied().find(|card| card.is_brown_zero()) {
            return PlayDecision {
                card: brown,
                tactic: PlayTactic::PoisonWithBrownZero,
            };
        }

        let card = Self::lowest_protecting(legal, false)
            .unwrap_or_else(|| Self::lowest(legal).unwrap_or(legal[0]));
        PlayDecision {
            card,
            tactic: PlayTactic::DuckLow,
        }
    }

    fn lead(ctx: &BotContext<'_>, legal: &[Card]) -> PlayDecision {
        let hand = ctx.hand();
        if let Some(trump) = ctx.trump() {
            let top_trump = legal
                .iter()
                .copied()
                .filter(|card| card.color == trump)
                .max_by_key(|card| card.value);
            if let Some(card) = top_trump {
                return PlayDecision {
                    card,
                    tactic: PlayTactic::LeadTrump,
                };
            }
        }

        // Endgame steer: with two cards left the Red Zero lead hands
        // the partner a chance at the +5 before it gets stranded.
        if hand.len() <= 2 {
            if let Some(red) = legal.iter().copied().find(|card| card.is_red_zero()) {
                return PlayDecision {
                    card: red,
                    tactic: PlayTactic::LeadRedZero,
                };
            }
        }

        // Longest non-trump color, highest card first.
        let trump = ctx.trump();
        let mut best_color: Option<(Color, usize)> = None;
        for color in Color::ALL {
            if trump == Some(color) {
                continue;
            }
            let count = hand.count_of(color);
            if count > 0 && best_color.is_none_or(|(_, best)| count > best) {
                best_color = Some((color, count));
            }
        }
        if let Some((color, _)) = best_color {
            let card = legal
                .iter()
                .copied()
                .filter(|card| card.color == color && !card.is_red_zero())
                .max_by_key(|card| card.value);
            if let Some(card) = card {
                return PlayDecision {
                    card,
                    tactic: PlayTactic::LeadLong,
                };
            }
        }

        let card = Self::highest(legal).unwrap_or(legal[0]);
        PlayDecision {
            card,
            tactic: PlayTactic::LeadLong,
        }
    }

    /// Lowest card while protecting the Red Zero, and the Brown Zero
    /// too when the partner is winning the trick.
    fn lowest_protecting(legal: &[Card], partner_winning: bool) -> Option<Card> {
        let filtered: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|card| {
                !card.is_red_zero() && !(partner_winning && card.is_brown_zero())
            })
            .collect();
        Self::lowest(&filtered)
    }

    fn lowest(cards: &[Card]) -> Option<Card> {
        cards
            .iter()
            .copied()
            .min_by_key(|card| (card.value, card.color.index()))
    }

    fn highest(cards: &[Card]) -> Option<Card> {
        cards
            .iter()
            .copied()
            .max_by_key(|card| (card.value, std::cmp::Reverse(card.color.index())))
    }
}
