//! five-hand: five-card poker hand classification and showdown ordering
//!
//! Goals:
//! - Deterministic classification into the ten standard categories
//! - A total order over hands, down to the suit of the deciding card
//! - Decks built by shuffling or from card codes, with duplicate detection
//!
//! ## Quick start: rank two hands
//! ```
//! use five_hand::evaluator::Category;
//! use five_hand::hand::{rank_hands, Hand};
//!
//! let mut hands: Vec<Hand> = ["AD, 2C, 3H, 4S, 5D", "2D, 3D, 4D, 5D, 7D"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! rank_hands(&mut hands);
//! assert_eq!(hands[0].category(), Some(Category::Flush));
//! assert_eq!(hands[1].category(), Some(Category::Straight));
//! ```
//!
//! ## CLI
//! Deal six hands from a shuffled deck, or from a file of card codes:
//! ```sh
//! cargo run --bin five-hand
//! cargo run --bin five-hand -- decks/royal.txt
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
