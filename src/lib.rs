//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Card`] value type and a [`Deck`] that populates
//! itself in canonical order, shuffles uniformly, and deals from the top
//! while keeping the rest of the deck in order.
//!
//! # Example
//!
//! ```no_run
//! use stdeck::Deck;
//!
//! let mut deck = Deck::new();
//! deck.shuffle();
//! while let Some(card) = deck.deal_one() {
//!     println!("{card}");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DeckState};
pub use error::{CardError, DeckError, ParseCardError};
pub use options::DeckOptions;
