//! Error types for card and deck construction.

use thiserror::Error;

/// Errors that can occur when building a card from possibly-absent parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// No rank was supplied.
    #[error("card rank is empty")]
    MissingRank,
    /// No suit was supplied.
    #[error("card suit is empty")]
    MissingSuit,
}

impl CardError {
    /// Returns the name of the field that was missing.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingRank => "rank",
            Self::MissingSuit => "suit",
        }
    }
}

/// Errors that can occur when parsing a card from its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Text is not of the form `<Rank> of <Suit>`.
    #[error("expected text of the form `<Rank> of <Suit>`")]
    Format,
    /// Rank name is not recognized.
    #[error("unknown card rank")]
    Rank,
    /// Suit name is not recognized.
    #[error("unknown card suit")]
    Suit,
}

/// Errors that can occur when building a deck from options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No seed was configured and no entropy source is available.
    #[error("no seed configured and the `std` feature is disabled")]
    MissingSeed,
}
