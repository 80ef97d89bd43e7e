//! Game configuration options.

/// Score at or above which the dealer stops drawing.
pub const DEALER_STANDS_ON: u32 = 17;

/// Remaining cards below which a fresh deck is shuffled before the next deal.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 15;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default().with_reshuffle_threshold(20);
/// assert_eq!(options.reshuffle_threshold, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// When fewer cards than this remain before a deal, the rest of the deck
    /// is discarded and a fresh shuffled deck replaces it.
    pub reshuffle_threshold: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
        }
    }
}

impl GameOptions {
    /// Sets the reshuffle threshold.
    ///
    /// Values below the three cards needed for the initial deal behave as
    /// three.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(26);
    /// assert_eq!(options.reshuffle_threshold, 26);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }
}
