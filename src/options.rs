//! Deck configuration options.

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use stdeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_seed(42)
///     .with_shuffle_on_create(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckOptions {
    /// Whether the deck is shuffled once right after it is populated.
    pub shuffle_on_create: bool,
    /// Seed for the deck's random generator.
    /// `None` to seed from operating system entropy (requires `std`).
    pub seed: Option<u64>,
}

impl DeckOptions {
    /// Sets whether the deck is shuffled on creation.
    ///
    /// # Example
    ///
    /// ```
    /// use stdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_on_create(true);
    /// assert!(options.shuffle_on_create);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_create(mut self, shuffle_on_create: bool) -> Self {
        self.shuffle_on_create = shuffle_on_create;
        self
    }

    /// Sets the seed for the deck's random generator.
    ///
    /// # Example
    ///
    /// ```
    /// use stdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(7);
    /// assert_eq!(options.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
