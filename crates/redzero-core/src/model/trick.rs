use crate::model::card::Card;
use crate::model::color::Color;
use crate::model::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Play {
    pub player: String,
    pub card: Card,
}

/// The trick currently in progress: 0 to 4 plays in acting order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trick {
    plays: Vec<Play>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrickError {
    TrickComplete,
    DuplicateCard(Card),
}

impl fmt::Display for TrickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrickError::TrickComplete => write!(f, "trick already complete"),
            TrickError::DuplicateCard(card) => {
                write!(f, "{card} has already been played this trick")
            }
        }
    }
}

impl std::error::Error for TrickError {}

impl Trick {
    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(4),
        }
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|play| play.card)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn lead_color(&self) -> Option<Color> {
        self.plays.first().map(|play| play.card.color)
    }

    pub fn contains_red_zero(&self) -> bool {
        self.plays.iter().any(|play| play.card.is_red_zero())
    }

    pub fn push(&mut self, player: impl Into<String>, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }
        if self.plays.iter().any(|play| play.card == card) {
            return Err(TrickError::DuplicateCard(card));
        }
        self.plays.push(Play {
            player: player.into(),
            card,
        });
        Ok(())
    }

    /// Left-to-right reduction; the earlier play is retained unless a
    /// later play strictly beats it, so order stays stable.
    pub fn winning_play(&self, trump: Option<Color>) -> Option<&Play> {
        let mut winner = self.plays.first()?;
        for play in &self.plays[1..] {
            if can_beat(play.card, winner.card, trump) {
                winner = play;
            }
        }
        Some(winner)
    }
}

/// Whether `candidate` would take the trick from the currently winning
/// `winner` card. Trump beats any non-trump; within a color, strictly
/// higher value wins; an unrelated third color never wins.
pub fn can_beat(candidate: Card, winner: Card, trump: Option<Color>) -> bool {
    if let Some(trump) = trump {
        if candidate.color == trump && winner.color != trump {
            return true;
        }
        if winner.color == trump && candidate.color != trump {
            return false;
        }
    }
    candidate.color == winner.color && candidate.value > winner.value
}

/// Whether `candidate` provably wins the trick, judged only from cards
/// visible in the trick so far plus `also_seen` (the caller's seen-card
/// ledger). This is a heuristic approximation: it reasons about values
/// 0-7 that have not been seen, not about which opponent holds them.
pub fn is_guaranteed_win(
    candidate: Card,
    trick: &Trick,
    trump: Option<Color>,
    also_seen: &HashSet<Card>,
) -> bool {
    let seen =
        |card: Card| also_seen.contains(&card) || trick.cards().any(|played| played == card);

    if let Some(winner) = trick.winning_play(trump) {
        if winner.card != candidate && !can_beat(candidate, winner.card, trump) {
            return false;
        }
    }

    match trump {
        Some(trump) if candidate.color == trump => Value::ORDERED
            .iter()
            .filter(|value| **value > candidate.value)
            .all(|&value| seen(Card::new(trump, value))),
        _ => {
            let lead = trick.lead_color().unwrap_or(candidate.color);
            if candidate.color != lead {
                return false;
            }
            if let Some(trump) = trump {
                // Any unseen trump could still cut in.
                let trump_remains = Value::ORDERED
                    .iter()
                    .any(|&value| !seen(Card::new(trump, value)));
                if trump_remains {
                    return false;
                }
            }
            Value::ORDERED
                .iter()
                .filter(|value| **value > candidate.value)
                .all(|&value| seen(Card::new(lead, value)))
        }
    }
}
