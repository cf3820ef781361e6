use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::trick::Trick;

/// Follow-suit rule. Leading allows the whole hand; otherwise cards of
/// the led color must be played when held, and any card (trump
/// included) may be discarded when the hand is void in the led color.
pub fn legal_moves(hand: &Hand, trick: &Trick) -> Vec<Card> {
    match trick.lead_color() {
        None => hand.cards().to_vec(),
        Some(lead) => {
            let follow: Vec<Card> = hand
                .iter()
                .copied()
                .filter(|card| card.color == lead)
                .collect();
            if follow.is_empty() {
                hand.cards().to_vec()
            } else {
                follow
            }
        }
    }
}
