use crate::model::card::Card;
use crate::model::color::Color;
use crate::model::hand::Hand;
use crate::model::value::Value;

/// Derived features of one hand against a (possibly hypothetical)
/// trump. Ephemeral: recomputed fresh on every call, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct HandStrength {
    pub trump_count: usize,
    pub trump_strength_sum: u32,
    pub high_card_count: usize,
    pub has_red_zero: bool,
    pub has_brown_zero: bool,
    pub color_distribution: [usize; 4],
    pub dominant_color: Option<Color>,
    pub estimated_tricks: f64,
    /// Best hypothetical trump; only filled in while betting (input
    /// trump was `None`).
    pub optimal_trump: Option<Color>,
    pub no_red_cards: bool,
    pub has_seven_in_dominant: bool,
}

/// Score a hand. With `trump` unset (betting phase) the best
/// hypothetical trump is chosen first and the hand is scored against
/// it. Pure and deterministic.
pub fn evaluate(hand: &Hand, trump: Option<Color>) -> HandStrength {
    let optimal_trump = if trump.is_none() {
        best_trump(hand)
    } else {
        None
    };
    let scoring_trump = trump.or(optimal_trump);

    let mut color_distribution = [0usize; 4];
    for card in hand.iter() {
        color_distribution[card.color.index()] += 1;
    }
    let dominant_color = dominant(&color_distribution, hand);

    let trump_count = scoring_trump.map_or(0, |color| hand.count_of(color));
    let trump_strength_sum = scoring_trump.map_or(0, |color| {
        hand.iter()
            .filter(|card| card.color == color)
            .map(|card| card.value.raw() as u32)
            .sum()
    });
    let high_card_count = hand.iter().filter(|card| card.value.is_high()).count();
    let has_red_zero = hand.contains(Card::new(Color::Red, Value::Zero));
    let has_brown_zero = hand.contains(Card::new(Color::Brown, Value::Zero));
    let no_red_cards = color_distribution[Color::Red.index()] == 0;
    let has_seven_in_dominant = dominant_color
        .is_some_and(|color| hand.contains(Card::new(color, Value::Seven)));

    let mut estimated_tricks = 0.0;
    for card in hand.iter() {
        if scoring_trump == Some(card.color) {
            estimated_tricks += trump_weight(card.value);
        } else {
            estimated_tricks += off_color_weight(card.value, trump_count);
        }
    }
    estimated_tricks += long_trump_bonus(trump_count);
    if has_red_zero {
        estimated_tricks += red_zero_bonus(trump_count);
    }
    if has_brown_zero {
        estimated_tricks -= brown_zero_penalty(trump_count);
    }

    HandStrength {
        trump_count,
        trump_strength_sum,
        high_card_count,
        has_red_zero,
        has_brown_zero,
        color_distribution,
        dominant_color,
        estimated_tricks,
        optimal_trump,
        no_red_cards,
        has_seven_in_dominant,
    }
}

/// Color maximizing `count + 2 * high_count`; ties resolve to the
/// first color in `Color::ALL`.
pub fn best_trump(hand: &Hand) -> Option<Color> {
    if hand.is_empty() {
        return None;
    }
    let mut best: Option<(Color, usize)> = None;
    for color in Color::ALL {
        let count = hand.count_of(color);
        let highs = hand
            .iter()
            .filter(|card| card.color == color && card.value.is_high())
            .count();
        let score = count + 2 * highs;
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((color, score));
        }
    }
    best.map(|(color, _)| color)
}

fn dominant(distribution: &[usize; 4], hand: &Hand) -> Option<Color> {
    if hand.is_empty() {
        return None;
    }
    let mut best: Option<(Color, usize)> = None;
    for color in Color::ALL {
        let count = distribution[color.index()];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((color, count));
        }
    }
    best.map(|(color, _)| color)
}

/// Probability-like chance that one trump card takes a trick.
fn trump_weight(value: Value) -> f64 {
    match value {
        Value::Seven => 0.95,
        Value::Six => 0.85,
        Value::Five => 0.70,
        Value::Four => 0.50,
        Value::Three => 0.35,
        _ => 0.25,
    }
}

/// Off-color high cards cash more reliably the more trump the hand
/// holds (opponents run out of the matching color while our trump
/// bleeds theirs dry).
fn off_color_weight(value: Value, trump_count: usize) -> f64 {
    match value {
        Value::Seven => match trump_count {
            count if count >= 5 => 0.85,
            4 => 0.60,
            3 => 0.45,
            _ => 0.30,
        },
        Value::Six => match trump_count {
            count if count >= 5 => 0.70,
            4 => 0.45,
            3 => 0.30,
            _ => 0.20,
        },
        Value::Five => match trump_count {
            count if count >= 5 => 0.50,
            4 => 0.30,
            3 => 0.20,
            _ => 0.10,
        },
        _ => 0.0,
    }
}

fn long_trump_bonus(trump_count: usize) -> f64 {
    let mut bonus = 0.0;
    if trump_count >= 5 {
        bonus += 0.5;
    }
    if trump_count >= 6 {
        bonus += 0.5;
    }
    if trump_count >= 7 {
        bonus += 0.75;
    }
    bonus
}

fn red_zero_bonus(trump_count: usize) -> f64 {
    match trump_count {
        count if count >= 4 => 1.0,
        3 => 0.75,
        2 => 0.5,
        _ => 0.25,
    }
}

fn brown_zero_penalty(trump_count: usize) -> f64 {
    match trump_count {
        count if count >= 5 => 0.4,
        4 => 0.25,
        _ => 0.1,
    }
}
