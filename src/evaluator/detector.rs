use super::hand_analysis::HandAnalysis;
use crate::evaluator::HandRank;

/// Strategy pattern: each category detector knows how to detect its category
/// and which cards break ties within it.
///
/// `detect` may assume every stronger detector has already failed.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build(&self, analysis: &HandAnalysis) -> HandRank;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Straight Flush: 10 through Ace, all same suit
pub struct RoyalStraightFlushDetector;

impl CategoryDetector for RoyalStraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_royal_run
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        HandRank::RoyalStraightFlush { high: analysis.card(4) }
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        HandRank::StraightFlush { high: analysis.straight_high() }
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.pattern.is_four_of_a_kind()
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        HandRank::FourOfAKind { pivot: analysis.card(2) }
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.pattern.is_full_house()
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        // The middle card always belongs to the three of a kind.
        HandRank::FullHouse { pivot: analysis.card(2) }
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        HandRank::Flush { high: analysis.card(4) }
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        HandRank::Straight { high: analysis.straight_high() }
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.pattern.is_three_of_a_kind()
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        HandRank::ThreeOfAKind { pivot: analysis.card(2) }
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.pattern.is_two_pair()
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        let pairs = analysis.pattern.paired_ranks();
        HandRank::TwoPair { high_pair: pairs[0], low_pair: pairs[1], kicker: analysis.kicker() }
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.pattern.is_pair()
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        let pair = analysis.pattern.paired_ranks()[0];
        HandRank::Pair { pair, kicker: analysis.kicker() }
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn build(&self, analysis: &HandAnalysis) -> HandRank {
        HandRank::HighCard { high: analysis.card(4) }
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalStraightFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card, Rank, Suit};

    fn analyze(codes: &str) -> HandAnalysis {
        let cards: [Card; 5] = parse_cards(codes).unwrap().try_into().unwrap();
        HandAnalysis::new(&cards)
    }

    #[test]
    fn test_royal_detector() {
        let analysis = analyze("10D, JD, QD, KD, AD");
        assert!(RoyalStraightFlushDetector.detect(&analysis));
        assert_eq!(
            RoyalStraightFlushDetector.build(&analysis),
            HandRank::RoyalStraightFlush { high: Card::new(Rank::Ace, Suit::Diamonds) }
        );
    }

    #[test]
    fn test_low_ace_straight_flush_is_not_royal() {
        let analysis = analyze("AH, 2H, 3H, 4H, 5H");
        assert!(!RoyalStraightFlushDetector.detect(&analysis));
        assert!(StraightFlushDetector.detect(&analysis));
        assert_eq!(
            StraightFlushDetector.build(&analysis),
            HandRank::StraightFlush { high: Card::new(Rank::Five, Suit::Hearts) }
        );
    }

    #[test]
    fn test_four_of_a_kind_pivot() {
        let analysis = analyze("2S, AS, AH, AD, AC");
        assert!(FourOfAKindDetector.detect(&analysis));
        let HandRank::FourOfAKind { pivot } = FourOfAKindDetector.build(&analysis) else {
            panic!("expected four of a kind");
        };
        assert_eq!(pivot.rank(), Rank::Ace);
    }

    #[test]
    fn test_full_house_pivot_is_trips_rank() {
        let analysis = analyze("5H, 5S, 5C, 9D, 9H");
        assert!(FullHouseDetector.detect(&analysis));
        let HandRank::FullHouse { pivot } = FullHouseDetector.build(&analysis) else {
            panic!("expected full house");
        };
        assert_eq!(pivot.rank(), Rank::Five);

        let analysis = analyze("5H, 5S, 9C, 9D, 9H");
        let HandRank::FullHouse { pivot } = FullHouseDetector.build(&analysis) else {
            panic!("expected full house");
        };
        assert_eq!(pivot.rank(), Rank::Nine);
    }

    #[test]
    fn test_flush_high_card() {
        let analysis = analyze("2D, 3D, 4D, 5D, 7D");
        assert!(FlushDetector.detect(&analysis));
        assert!(!StraightDetector.detect(&analysis));
        assert_eq!(
            FlushDetector.build(&analysis),
            HandRank::Flush { high: Card::new(Rank::Seven, Suit::Diamonds) }
        );
    }

    #[test]
    fn test_wheel_straight_high_is_five() {
        let analysis = analyze("AD, 2C, 3H, 4S, 5D");
        assert!(StraightDetector.detect(&analysis));
        assert_eq!(
            StraightDetector.build(&analysis),
            HandRank::Straight { high: Card::new(Rank::Five, Suit::Diamonds) }
        );
    }

    #[test]
    fn test_two_pair_build() {
        let analysis = analyze("JC, 4D, 9C, JD, 9H");
        assert!(TwoPairDetector.detect(&analysis));
        assert_eq!(
            TwoPairDetector.build(&analysis),
            HandRank::TwoPair {
                high_pair: Rank::Jack,
                low_pair: Rank::Nine,
                kicker: Card::new(Rank::Four, Suit::Diamonds),
            }
        );
    }

    #[test]
    fn test_one_pair_build() {
        let analysis = analyze("7D, 7C, 2H, 3S, 9D");
        assert!(OnePairDetector.detect(&analysis));
        assert_eq!(
            OnePairDetector.build(&analysis),
            HandRank::Pair { pair: Rank::Seven, kicker: Card::new(Rank::Nine, Suit::Diamonds) }
        );
    }

    #[test]
    fn test_high_card_detector() {
        let analysis = analyze("AS, KH, JD, 9C, 7S");
        assert!(!OnePairDetector.detect(&analysis));
        assert!(HighCardDetector.detect(&analysis));
        assert_eq!(
            HighCardDetector.build(&analysis),
            HandRank::HighCard { high: Card::new(Rank::Ace, Suit::Spades) }
        );
    }

    #[test]
    fn test_detector_priority_straight_flush_over_flush() {
        let analysis = analyze("9H, 8H, 7H, 6H, 5H");

        // Straight, flush and straight flush all match; the list order decides.
        assert!(StraightFlushDetector.detect(&analysis));
        assert!(FlushDetector.detect(&analysis));
        assert!(StraightDetector.detect(&analysis));
        let first = DETECTORS.iter().find(|d| d.detect(&analysis)).unwrap();
        assert!(matches!(first.build(&analysis), HandRank::StraightFlush { .. }));
    }
}
