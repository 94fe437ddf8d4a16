use super::rank_pattern::RankPattern;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Evaluation, HandRank};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ascending by rank, then suit, so tie-break cards do not depend on
    /// the order the cards were dealt in.
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    pub pattern: RankPattern,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort();

        let ranks = sorted_cards.map(Card::rank);

        let pattern = RankPattern::new(ranks);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, pattern, suit_info, straight_info }
    }

    /// Card at `index` of the ascending view.
    pub fn card(&self, index: usize) -> Card {
        self.sorted_cards[index]
    }

    /// Top card of a straight: index 4, or index 3 (the Five) when the Ace
    /// plays low.
    pub fn straight_high(&self) -> Card {
        if self.straight_info.ace_low {
            self.sorted_cards[3]
        } else {
            self.sorted_cards[4]
        }
    }

    /// Highest card whose rank is not shared with any other card.
    pub fn kicker(&self) -> Card {
        self.sorted_cards
            .iter()
            .rev()
            .copied()
            .find(|c| self.pattern.count(c.rank()) == 1)
            .unwrap_or(self.sorted_cards[4])
    }

    pub fn build_evaluation(&self, rank: HandRank) -> Evaluation {
        Evaluation::new(rank, self.sorted_cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn analyze(codes: &str) -> HandAnalysis {
        let cards: [Card; 5] = parse_cards(codes).unwrap().try_into().unwrap();
        HandAnalysis::new(&cards)
    }

    #[test]
    fn test_royal_flush_analysis() {
        let analysis = analyze("AS, KS, QS, JS, 10S");

        assert!(analysis.suit_info.is_flush);
        assert!(analysis.straight_info.is_straight);
        assert!(analysis.straight_info.is_royal_run);
        assert!(!analysis.straight_info.ace_low);
        assert_eq!(analysis.straight_high(), Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn test_wheel_straight_analysis() {
        let analysis = analyze("AS, 2H, 3D, 4C, 5S");

        assert!(analysis.straight_info.is_straight);
        assert!(analysis.straight_info.ace_low);
        assert!(!analysis.straight_info.is_royal_run);
        assert_eq!(analysis.straight_high(), Card::new(Rank::Five, Suit::Spades));
    }

    #[test]
    fn test_cards_sorted_ascending() {
        let analysis = analyze("3S, AH, 5D, KC, 9S");
        let ranks: Vec<Rank> = analysis.ranks.to_vec();
        assert_eq!(ranks, vec![Rank::Three, Rank::Five, Rank::Nine, Rank::King, Rank::Ace]);
    }

    #[test]
    fn test_equal_ranks_sorted_by_suit() {
        let analysis = analyze("7S, 7D, 7H, 2C, 2D");
        assert_eq!(analysis.card(2), Card::new(Rank::Seven, Suit::Diamonds));
        assert_eq!(analysis.card(4), Card::new(Rank::Seven, Suit::Spades));
        assert_eq!(analysis.card(0), Card::new(Rank::Two, Suit::Diamonds));
    }

    #[test]
    fn test_kicker_skips_paired_cards() {
        // The pair is the top rank; the kicker is the next unpaired card.
        let analysis = analyze("9D, 9C, 2H, 3S, 5D");
        assert_eq!(analysis.kicker(), Card::new(Rank::Five, Suit::Diamonds));

        let analysis = analyze("7D, 7C, 2H, 3S, 9D");
        assert_eq!(analysis.kicker(), Card::new(Rank::Nine, Suit::Diamonds));
    }

    #[test]
    fn test_two_pair_kicker_is_the_single_card() {
        let analysis = analyze("AS, AH, KD, KC, QS");
        assert_eq!(analysis.kicker(), Card::new(Rank::Queen, Suit::Spades));

        let analysis = analyze("AS, AH, 2D, KD, KC");
        assert_eq!(analysis.kicker(), Card::new(Rank::Two, Suit::Diamonds));
    }
}
