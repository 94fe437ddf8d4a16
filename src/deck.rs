use crate::cards::{parse_cards, Card, CardParseError, Rank, Suit};
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read deck: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: CardParseError,
    },
    #[error("cannot draw from an empty deck")]
    Empty,
}

/// How the deck's cards were produced. Only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckOrigin {
    /// A full 52-card deck in random order.
    Shuffled,
    /// Cards supplied as codes, in input order.
    Codes,
}

impl DeckOrigin {
    /// Cards printed per row.
    const fn row_len(self) -> usize {
        match self {
            DeckOrigin::Shuffled => 13,
            DeckOrigin::Codes => 5,
        }
    }
}

/// An ordered pile of cards drawn from the front.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
    duplicate: Option<Card>,
    origin: Option<DeckOrigin>,
}

impl Deck {
    /// An empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// The 52 cards in suit-major order, unshuffled.
    ///
    /// ```
    /// use five_hand::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.duplicate(), None);
    /// ```
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push_back(Card::new(r, s));
            }
        }
        Self { cards, duplicate: None, origin: None }
    }

    /// A shuffled 52-card deck using a seeded RNG for reproducibility.
    pub fn shuffled_seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.build_random(&mut rng);
        deck
    }

    /// Replace the contents with all 52 cards in a uniformly random order.
    pub fn build_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut cards: Vec<Card> = Self::standard().cards.into();
        cards.shuffle(rng);
        self.cards = cards.into();
        self.duplicate = None;
        self.origin = Some(DeckOrigin::Shuffled);
        debug!("built shuffled deck of {} cards", self.cards.len());
    }

    /// Append cards parsed from `codes`, in order.
    ///
    /// A card already present in the deck is still appended; the first such
    /// card is remembered and reported by [`Deck::duplicate`]. Parsing stops
    /// at the first malformed code.
    ///
    /// ```
    /// use five_hand::deck::Deck;
    ///
    /// let mut deck = Deck::new();
    /// deck.build_from_codes([" AH", "10C", " AH"]).unwrap();
    /// assert_eq!(deck.len(), 3);
    /// assert_eq!(deck.duplicate().unwrap().to_string(), "AH");
    /// ```
    pub fn build_from_codes<I, S>(&mut self, codes: I) -> Result<(), CardParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.origin = Some(DeckOrigin::Codes);
        for code in codes {
            let card: Card = code.as_ref().parse()?;
            self.push_code_card(card);
        }
        Ok(())
    }

    fn push_code_card(&mut self, card: Card) {
        if self.duplicate.is_none() && self.cards.contains(&card) {
            warn!("duplicate card {card} in deck");
            self.duplicate = Some(card);
        }
        self.cards.push_back(card);
    }

    /// Read lines of comma-separated card codes. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DeckError> {
        let mut deck = Self::new();
        deck.origin = Some(DeckOrigin::Codes);
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let cards =
                parse_cards(&line).map_err(|source| DeckError::Parse { line: idx + 1, source })?;
            for card in cards {
                deck.push_code_card(card);
            }
        }
        debug!("read deck of {} cards", deck.len());
        Ok(deck)
    }

    /// Read a deck file; see [`Deck::from_reader`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DeckError::NotFound { path: path.to_path_buf() },
            _ => DeckError::Io(e),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, front first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn origin(&self) -> Option<DeckOrigin> {
        self.origin
    }

    /// First card found twice while building from codes.
    pub fn duplicate(&self) -> Option<Card> {
        self.duplicate
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_len = self.origin.unwrap_or(DeckOrigin::Shuffled).row_len();
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(if i % row_len == 0 { "\n" } else { "," })?;
            }
            write!(f, "{card:>3}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Cursor;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.cards().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::shuffled_seeded(42);
        let d2 = Deck::shuffled_seeded(42);
        assert_eq!(d1.cards, d2.cards);
        assert_eq!(d1.origin(), Some(DeckOrigin::Shuffled));
    }

    #[test]
    fn build_random_replaces_contents() {
        let mut d = Deck::new();
        d.build_from_codes(["AH", "AH"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        d.build_random(&mut rng);
        assert_eq!(d.len(), 52);
        assert_eq!(d.duplicate(), None);
    }

    #[test]
    fn draw_takes_from_the_front_until_empty() {
        let mut d = Deck::new();
        d.build_from_codes(["2C", "3C"]).unwrap();
        assert_eq!(d.draw().unwrap().to_string(), "2C");
        assert_eq!(d.draw().unwrap().to_string(), "3C");
        assert!(d.is_empty());
        assert!(matches!(d.draw(), Err(DeckError::Empty)));
    }

    #[test]
    fn only_the_first_duplicate_is_recorded() {
        let mut d = Deck::new();
        d.build_from_codes(["AH", "KS", "KS", "AH"]).unwrap();
        assert_eq!(d.len(), 4);
        assert_eq!(d.duplicate(), Some(Card::new(Rank::King, Suit::Spades)));
    }

    #[test]
    fn malformed_code_is_rejected() {
        let mut d = Deck::new();
        let err = d.build_from_codes(["AH", "ZZ"]).unwrap_err();
        assert!(matches!(err, CardParseError::Rank(_)));
    }

    #[test]
    fn reader_spans_lines_and_reports_line_numbers() {
        let input = " AH, KS, 10C, 2D, 3D\n\n 4D, AH\n";
        let d = Deck::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(d.len(), 7);
        assert_eq!(d.duplicate(), Some(Card::new(Rank::Ace, Suit::Hearts)));

        let err = Deck::from_reader(Cursor::new(" AH\n 9X\n")).unwrap_err();
        assert!(matches!(err, DeckError::Parse { line: 2, .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Deck::from_file("/definitely/not/a/deck.txt").unwrap_err();
        assert!(matches!(err, DeckError::NotFound { .. }));
    }

    #[test]
    fn display_rows_follow_origin() {
        let codes = " AH, KS, 10C, 2D, 3D, 4D";
        let d = Deck::from_reader(Cursor::new(codes)).unwrap();
        assert_eq!(d.to_string(), " AH, KS,10C, 2D, 3D\n 4D");

        let shuffled = Deck::shuffled_seeded(1).to_string();
        let rows: Vec<&str> = shuffled.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.split(',').count() == 13));
    }
}
