use crate::cards::{parse_cards, Card};
use crate::evaluator::{evaluate_five, Category, Evaluation};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a complete hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    Count(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A five-card poker hand, filled one card at a time by the dealer.
///
/// Classification is a pure function of the held cards; [`Hand::classify`]
/// additionally remembers the category so the hand renders with its label.
///
/// ```
/// use five_hand::evaluator::Category;
/// use five_hand::hand::Hand;
///
/// let mut hand: Hand = "5H, 5S, 5C, 9D, 9H".parse().unwrap();
/// assert_eq!(hand.classify(), Category::FullHouse);
/// assert_eq!(hand.to_string(), " 5H  5S  5C  9D  9H - Full House");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    category: Option<Category>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards: cards.to_vec(), category: None }
    }

    pub fn try_from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::Count(cards.len()))?;
        Ok(Self::from_cards(cards))
    }

    /// Append a card. Any remembered category is discarded.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.category = None;
    }

    /// Cards in the order they were added.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    /// Category remembered by the last [`Hand::classify`] call.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Classify the hand and remember the result for display.
    ///
    /// # Panics
    /// If the hand does not hold exactly five cards.
    pub fn classify(&mut self) -> Category {
        let category = self.evaluate().category;
        self.category = Some(category);
        category
    }

    /// Full evaluation: category, tie-break data and the sorted view.
    ///
    /// # Panics
    /// If the hand does not hold exactly five cards.
    pub fn evaluate(&self) -> Evaluation {
        let cards: [Card; HAND_SIZE] = match self.cards.as_slice().try_into() {
            Ok(cards) => cards,
            Err(_) => panic!("hand must hold {HAND_SIZE} cards, has {}", self.cards.len()),
        };
        evaluate_five(&cards)
    }

    /// Showdown order: `Less` when `self` is the stronger hand, so that
    /// sorting with this comparator puts the winner first.
    ///
    /// ```
    /// use five_hand::hand::Hand;
    /// use std::cmp::Ordering;
    ///
    /// let flush: Hand = "2D, 3D, 4D, 5D, 7D".parse().unwrap();
    /// let straight: Hand = "AD, 2C, 3H, 4S, 5D".parse().unwrap();
    /// assert_eq!(flush.compare(&straight), Ordering::Less);
    /// ```
    ///
    /// # Panics
    /// If either hand does not hold exactly five cards.
    pub fn compare(&self, other: &Hand) -> Ordering {
        other.evaluate().cmp(&self.evaluate())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card:>3}")?;
        }
        if let Some(category) = self.category {
            write!(f, " - {category}")?;
        }
        Ok(())
    }
}

/// Classify every hand and sort them strongest first.
pub fn rank_hands(hands: &mut [Hand]) {
    for hand in hands.iter_mut() {
        hand.classify();
    }
    hands.sort_by(Hand::compare);
}
