//! Game configuration options.

use crate::strategy::Strategy;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::{GameOptions, Strategy};
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_starting_balance(500)
///     .with_strategy(Some(Strategy::Cautious));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe. Zero is treated as one.
    pub decks: u8,
    /// Balance the player starts with.
    pub starting_balance: i64,
    /// Bet used by callers that do not choose an amount.
    pub default_bet: i64,
    /// Strategy making the player's decisions, or `None` for manual play.
    pub strategy: Option<Strategy>,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 3,
            starting_balance: 1000,
            default_bet: 50,
            strategy: None,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the default bet.
    #[must_use]
    pub const fn with_default_bet(mut self, bet: i64) -> Self {
        self.default_bet = bet;
        self
    }

    /// Sets the strategy used for automated play.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{GameOptions, Strategy};
    ///
    /// let options = GameOptions::default().with_strategy(Some(Strategy::Aggressive));
    /// assert_eq!(options.strategy, Some(Strategy::Aggressive));
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Option<Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
