//! Game configuration options.

/// What happens after a round when the player is asked to play again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ReplayPolicy {
    /// Offer a single extra round. Invalid answers end the session.
    #[default]
    Once,
    /// Keep offering rounds until the player declines. Invalid answers re-prompt.
    UntilDeclined,
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::{GameOptions, ReplayPolicy};
///
/// let options = GameOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_replay(ReplayPolicy::UntilDeclined);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Replay prompt behavior.
    pub replay: ReplayPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            stand_on_soft_17: true,
            replay: ReplayPolicy::Once,
        }
    }
}

impl GameOptions {
    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the replay policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{GameOptions, ReplayPolicy};
    ///
    /// let options = GameOptions::default().with_replay(ReplayPolicy::UntilDeclined);
    /// assert_eq!(options.replay, ReplayPolicy::UntilDeclined);
    /// ```
    #[must_use]
    pub const fn with_replay(mut self, replay: ReplayPolicy) -> Self {
        self.replay = replay;
        self
    }
}
