//! The standard 52-card deck.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::options::DeckOptions;

/// Whether a deck still has cards to deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// At least one card remains.
    HasCards,
    /// Every card has been dealt. Terminal.
    Empty,
}

/// An ordered deck of unique playing cards.
///
/// A new deck holds all 52 cards in canonical order: every rank of Hearts
/// (Ace through King), then Diamonds, then Clubs, then Spades. Cards are
/// dealt from the front. Once empty, a deck stays empty.
///
/// Each deck owns its random generator, so independent decks never share
/// random state.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck, front first.
    cards: VecDeque<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck in canonical order, seeded from operating system entropy.
    ///
    /// # Example
    ///
    /// ```
    /// use stdeck::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.deal_one(), Some(Card::new(Rank::Ace, Suit::Hearts)));
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(DeckOptions::default(), ChaCha8Rng::from_os_rng())
    }

    /// Creates a deck in canonical order with a seeded random generator.
    ///
    /// Two decks built with the same seed shuffle identically.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(DeckOptions::default(), ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a deck from the given options.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::MissingSeed`] if no seed is configured and the
    /// `std` feature is disabled. With `std` enabled this never fails.
    pub fn with_options(options: DeckOptions) -> Result<Self, DeckError> {
        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            #[cfg(feature = "std")]
            None => ChaCha8Rng::from_os_rng(),
            #[cfg(not(feature = "std"))]
            None => return Err(DeckError::MissingSeed),
        };

        Ok(Self::from_rng(options, rng))
    }

    fn from_rng(options: DeckOptions, rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Self::create_cards(),
            rng,
        };
        debug!(cards = deck.cards.len(), "created deck");

        if options.shuffle_on_create {
            deck.shuffle();
        }
        deck
    }

    /// Populates every rank of every suit, suits outermost.
    fn create_cards() -> VecDeque<Card> {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Shuffles the cards remaining in the deck.
    ///
    /// Every permutation of the remaining cards is equally likely. The set of
    /// cards is unchanged. Does nothing on an empty deck.
    pub fn shuffle(&mut self) {
        if self.cards.is_empty() {
            return;
        }

        self.cards.make_contiguous().shuffle(&mut self.rng);
        debug!(cards = self.cards.len(), "shuffled deck");
    }

    /// Deals the card at the front of the deck.
    ///
    /// The remaining cards keep their relative order. Returns `None` once the
    /// deck is empty, and keeps returning `None` on every later call.
    pub fn deal_one(&mut self) -> Option<Card> {
        let Some(card) = self.cards.pop_front() else {
            debug!("deal attempted on empty deck");
            return None;
        };

        trace!(%card, remaining = self.cards.len(), "dealt card");
        if self.cards.is_empty() {
            debug!("dealt last card");
        }
        Some(card)
    }

    /// Returns a snapshot of the cards in the deck, front first.
    ///
    /// The snapshot does not follow later shuffles or deals.
    #[must_use]
    pub fn remaining(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Returns the card that would be dealt next without dealing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns an iterator over the cards in the deck, front first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the deck holds the given card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the current deck state.
    #[must_use]
    pub fn state(&self) -> DeckState {
        if self.cards.is_empty() {
            DeckState::Empty
        } else {
            DeckState::HasCards
        }
    }
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
