use crate::cards::{Card, Suit};

/// The suit shared by all five cards, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let suit = cards[0].suit();
        let flush_suit = cards[1..].iter().all(|c| c.suit() == suit).then_some(suit);
        SuitInfo { is_flush: flush_suit.is_some(), flush_suit }
    }
}
