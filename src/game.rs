//! The Five Hand table: build a deck, deal hands, and report the showdown.

use crate::cards::Card;
use crate::deck::{Deck, DeckError, DeckOrigin};
use crate::hand::{rank_hands, Hand, HAND_SIZE};
use log::{debug, info};
use rand::Rng;
use std::io::{self, Write};
use std::path::PathBuf;

/// Hands dealt when not configured otherwise.
pub const DEFAULT_HANDS: usize = 6;

/// Largest table a 52-card deck can serve.
pub const MAX_HANDS: usize = 10;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("duplicated card found in deck: {0}")]
    DuplicateCard(Card),
    #[error("cannot deal {0} hands")]
    TableSize(usize),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Where the deck comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// A shuffled 52-card deck, seeded for reproducible runs.
    Random { seed: Option<u64> },
    /// A file of comma-separated card codes.
    File(PathBuf),
}

/// One game: a deck and the hands dealt from it.
#[derive(Debug)]
pub struct FiveHand {
    deck: Deck,
    hands: Vec<Hand>,
    source: DeckSource,
}

impl FiveHand {
    /// Build the deck for `source`. A missing file is an error.
    pub fn new(source: DeckSource, num_hands: usize) -> Result<Self, GameError> {
        let deck = match &source {
            DeckSource::Random { seed: Some(seed) } => Deck::shuffled_seeded(*seed),
            DeckSource::Random { seed: None } => {
                let mut deck = Deck::new();
                deck.build_random(&mut rand::rng());
                deck
            }
            DeckSource::File(path) => Deck::from_file(path)?,
        };
        Self::with_deck(deck, source, num_hands)
    }

    /// Use an already built deck.
    pub fn with_deck(deck: Deck, source: DeckSource, num_hands: usize) -> Result<Self, GameError> {
        if !(2..=MAX_HANDS).contains(&num_hands) {
            return Err(GameError::TableSize(num_hands));
        }
        Ok(Self { deck, hands: vec![Hand::new(); num_hands], source })
    }

    /// Shuffle a fresh deck with the given RNG.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, num_hands: usize) -> Result<Self, GameError> {
        let mut deck = Deck::new();
        deck.build_random(rng);
        Self::with_deck(deck, DeckSource::Random { seed: None }, num_hands)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Deal five cards to every hand.
    ///
    /// A shuffled deck is dealt one card per hand in turn; a deck read from
    /// codes gives each hand five consecutive cards. Refuses to deal from a
    /// deck that recorded a duplicate.
    pub fn deal(&mut self) -> Result<(), GameError> {
        if let Some(card) = self.deck.duplicate() {
            return Err(GameError::DuplicateCard(card));
        }

        let n = self.hands.len();
        for i in 0..n * HAND_SIZE {
            let seat = match self.deck.origin() {
                Some(DeckOrigin::Codes) => i / HAND_SIZE,
                _ => i % n,
            };
            let card = self.deck.draw()?;
            self.hands[seat].add_card(card);
        }
        debug!("dealt {n} hands, {} cards left", self.deck.len());
        Ok(())
    }

    /// Classify the hands and sort them strongest first.
    pub fn rank(&mut self) {
        rank_hands(&mut self.hands);
        if let Some(winner) = self.hands.first() {
            info!("winning hand: {winner}");
        }
    }

    /// Run the whole game, writing the report to `out`.
    ///
    /// On a duplicate card the error banner is written and
    /// [`GameError::DuplicateCard`] returned without dealing.
    pub fn play<W: Write>(&mut self, out: &mut W) -> Result<(), GameError> {
        writeln!(out, "\n*** P O K E R   H A N D   A N A L Y Z E R ***\n")?;

        match &self.source {
            DeckSource::Random { .. } => {
                writeln!(out, "\n*** USING RANDOMIZED DECK OF CARDS ***\n")?;
                writeln!(out, "*** Shuffled 52 card deck")?;
            }
            DeckSource::File(path) => {
                writeln!(out, "\n*** USING TEST DECK ***\n")?;
                writeln!(out, "*** File: {}", path.display())?;
            }
        }
        writeln!(out, "{}", self.deck)?;

        if let Some(card) = self.deck.duplicate() {
            writeln!(out, "\n*** ERROR - DUPLICATED CARD FOUND IN DECK ***\n")?;
            writeln!(out, "*** DUPLICATE: {card} ***\n")?;
            return Err(GameError::DuplicateCard(card));
        }

        self.deal()?;

        writeln!(out, "\n*** Here are the {} hands...", count_word(self.hands.len()))?;
        self.write_hands(out)?;

        if matches!(self.source, DeckSource::Random { .. }) {
            writeln!(out, "\n*** Here is what remains in the deck...")?;
            writeln!(out, "{}", self.deck)?;
        }

        writeln!(out, "\n--- WINNING HAND ORDER ---")?;
        self.rank();
        self.write_hands(out)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_hands<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for hand in &self.hands {
            writeln!(out, "{hand}")?;
        }
        Ok(())
    }
}

fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] =
        ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];
    WORDS.get(n).map_or_else(|| n.to_string(), |w| (*w).to_string())
}
