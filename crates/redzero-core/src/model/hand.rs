use crate::model::card::Card;
use crate::model::color::Color;
use serde::{Deserialize, Serialize};

/// A player's private cards for the round, at most 8 and unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        if !self.cards.contains(&card) {
            self.cards.push(card);
            self.sort();
        }
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn count_of(&self, color: Color) -> usize {
        self.cards.iter().filter(|card| card.color == color).count()
    }

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.color.cmp(&b.color).then(a.value.cmp(&b.value)));
    }
}
