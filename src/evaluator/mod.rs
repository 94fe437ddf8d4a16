pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_pattern;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// The discriminant is the conventional category number (High Card = 1,
/// Royal Straight Flush = 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalStraightFlush = 10,
}

impl Category {
    /// All categories, strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalStraightFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::RoyalStraightFlush => "Royal Straight Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::Pair => "Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified hand together with exactly the data its tie-break needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandRank {
    RoyalStraightFlush { high: Card },
    /// `high` is the Five for a low-ace (A-2-3-4-5) run.
    StraightFlush { high: Card },
    FourOfAKind { pivot: Card },
    FullHouse { pivot: Card },
    Flush { high: Card },
    /// `high` is the Five for a low-ace (A-2-3-4-5) run.
    Straight { high: Card },
    ThreeOfAKind { pivot: Card },
    TwoPair { high_pair: Rank, low_pair: Rank, kicker: Card },
    Pair { pair: Rank, kicker: Card },
    HighCard { high: Card },
}

impl HandRank {
    pub const fn category(&self) -> Category {
        match self {
            HandRank::RoyalStraightFlush { .. } => Category::RoyalStraightFlush,
            HandRank::StraightFlush { .. } => Category::StraightFlush,
            HandRank::FourOfAKind { .. } => Category::FourOfAKind,
            HandRank::FullHouse { .. } => Category::FullHouse,
            HandRank::Flush { .. } => Category::Flush,
            HandRank::Straight { .. } => Category::Straight,
            HandRank::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandRank::TwoPair { .. } => Category::TwoPair,
            HandRank::Pair { .. } => Category::Pair,
            HandRank::HighCard { .. } => Category::HighCard,
        }
    }

    /// The card whose rank, then suit, settles the last comparison step.
    pub const fn deciding_card(&self) -> Card {
        match *self {
            HandRank::RoyalStraightFlush { high }
            | HandRank::StraightFlush { high }
            | HandRank::Flush { high }
            | HandRank::Straight { high }
            | HandRank::HighCard { high } => high,
            HandRank::FourOfAKind { pivot }
            | HandRank::FullHouse { pivot }
            | HandRank::ThreeOfAKind { pivot } => pivot,
            HandRank::TwoPair { kicker, .. } | HandRank::Pair { kicker, .. } => kicker,
        }
    }

    /// Fixed-arity tie-break key, compared lexicographically.
    ///
    /// Rank-only steps come first (pair ranks), followed by the deciding
    /// card's rank and suit. Unused trailing slots are zero.
    pub const fn tiebreak_key(&self) -> [u8; 4] {
        let card = self.deciding_card();
        let (rank, suit) = (card.rank().value(), card.suit().index());
        match *self {
            HandRank::TwoPair { high_pair, low_pair, .. } => {
                [high_pair.value(), low_pair.value(), rank, suit]
            }
            HandRank::Pair { pair, .. } => [pair.value(), rank, suit, 0],
            _ => [rank, suit, 0, 0],
        }
    }
}

/// Compact, comparable hand strength. Higher is stronger.
/// Encodes category and the tie-break key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and tie-break key into a comparable value.
    pub fn from_parts(category: Category, key: &[u8; 4]) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | k0 (8) | k1 (8) | k2 (8) | k3 (8) ]
        const CAT_SHIFT: u32 = 32;
        let mut v: u64 = (category.ordinal() as u64) << CAT_SHIFT;
        for (i, k) in key.iter().enumerate() {
            let offset = CAT_SHIFT - 8 * (i as u32 + 1);
            v |= (*k as u64) << offset;
        }
        HandValue(v)
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    pub category: Category,
    pub rank: HandRank,
    /// The five cards sorted ascending by rank, then suit.
    pub sorted: [Card; 5],
    value: HandValue,
}

impl Evaluation {
    pub(crate) fn new(rank: HandRank, sorted: [Card; 5]) -> Self {
        let category = rank.category();
        let value = HandValue::from_parts(category, &rank.tiebreak_key());
        Self { category, rank, sorted, value }
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

/// Classify exactly five cards.
///
/// ```
/// use five_hand::cards::{parse_cards, Card};
/// use five_hand::evaluator::{evaluate_five, Category};
///
/// let cards: [Card; 5] = parse_cards("10D, JD, QD, KD, AD").unwrap().try_into().unwrap();
/// assert_eq!(evaluate_five(&cards).category, Category::RoyalStraightFlush);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return analysis.build_evaluation(detector.build(&analysis));
        }
    }

    unreachable!("HighCard detector should always match")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn categories_order_weakest_to_strongest() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted[0], Category::HighCard);
        assert_eq!(sorted[9], Category::RoyalStraightFlush);
        for (i, c) in sorted.iter().enumerate() {
            assert_eq!(c.ordinal() as usize, i + 1);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Category::RoyalStraightFlush.to_string(), "Royal Straight Flush");
        assert_eq!(Category::FourOfAKind.label(), "Four of a Kind");
        assert_eq!(Category::HighCard.label(), "High Card");
    }

    #[test]
    fn two_pair_key_orders_high_low_then_kicker() {
        let kicker = Card::new(Rank::Four, Suit::Clubs);
        let r = HandRank::TwoPair { high_pair: Rank::Jack, low_pair: Rank::Nine, kicker };
        assert_eq!(r.tiebreak_key(), [11, 9, 4, 1]);
        assert_eq!(r.category(), Category::TwoPair);
        assert_eq!(r.deciding_card(), kicker);
    }

    #[test]
    fn value_packs_category_above_key() {
        let weak_top = HandValue::from_parts(Category::Pair, &[14, 14, 3, 0]);
        let strong_bottom = HandValue::from_parts(Category::TwoPair, &[3, 2, 4, 0]);
        assert!(strong_bottom > weak_top);
        assert!(HandValue::from_parts(Category::Pair, &[5, 9, 1, 0]).raw()
            > HandValue::from_parts(Category::Pair, &[5, 9, 0, 0]).raw());
    }

    #[test]
    fn evaluate_five_categories() {
        let cases = [
            ("10S, JS, QS, KS, AS", Category::RoyalStraightFlush),
            ("9H, 8H, 7H, 6H, 5H", Category::StraightFlush),
            ("AC, 2C, 3C, 4C, 5C", Category::StraightFlush),
            ("KC, KD, KH, KS, 2S", Category::FourOfAKind),
            ("10C, 10D, 10H, 2S, 2H", Category::FullHouse),
            ("AH, 9H, 7H, 3H, 2H", Category::Flush),
            ("AC, 2D, 3H, 4S, 5C", Category::Straight),
            ("QC, QD, QH, 9S, 2C", Category::ThreeOfAKind),
            ("JC, JD, 9C, 9H, 2S", Category::TwoPair),
            ("AH, AD, 10S, 9C, 2D", Category::Pair),
            ("AH, KD, 7S, 5C, 2D", Category::HighCard),
        ];
        for (codes, expected) in cases {
            let cards: [Card; 5] =
                crate::cards::parse_cards(codes).unwrap().try_into().unwrap();
            assert_eq!(evaluate_five(&cards).category, expected, "{codes}");
        }
    }
}
