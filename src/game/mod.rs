//! Game engine and state management.

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DrawError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::strategy::Strategy;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// Score at which the dealer stops drawing.
pub const DEALER_STAND_THRESHOLD: u32 = 17;

/// A single-player blackjack engine.
///
/// The game owns the shoe, both hands, the bet and the balance. Every
/// mutating operation checks the current [`GameState`] first and does nothing
/// when called in the wrong state, so callers should gate on
/// [`state`](Self::state) for a sensible user experience.
///
/// The balance is never debited when a bet is placed; it only moves when the
/// round is resolved.
#[derive(Debug, Clone)]
pub struct Game {
    shoe: Shoe,
    options: GameOptions,
    state: GameState,
    player_hand: Hand,
    dealer_hand: Hand,
    balance: i64,
    bet: i64,
    message: String,
    last_result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.balance(), 1000);
    /// assert_eq!(game.cards_remaining(), 156);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng);

        Self {
            shoe,
            balance: options.starting_balance,
            options,
            state: GameState::Betting,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            bet: 0,
            message: String::new(),
            last_result: None,
            rng,
        }
    }

    /// Draws a card, rebuilding the shoe first if it has run dry.
    fn draw(&mut self) -> Result<Card, DrawError> {
        if self.shoe.is_empty() {
            log::info!("shoe empty, reshuffling {} decks", self.shoe.decks());
            self.shoe.reshuffle(&mut self.rng);
        }
        self.shoe.draw()
    }

    /// Rebuilds the shoe if it has fallen below the reshuffle threshold.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        if !self.shoe.needs_reshuffle() {
            return false;
        }

        log::info!("deck low ({} cards), reshuffling", self.shoe.len());
        self.shoe.reshuffle(&mut self.rng);
        true
    }

    /// Clears hands, bet and message and returns to the betting state.
    ///
    /// Checks the shoe against the reshuffle threshold. The balance carries
    /// over.
    pub fn reset_round(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.message.clear();
        self.bet = 0;
        self.last_result = None;
        self.state = GameState::Betting;
        self.check_and_reshuffle();
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the configured strategy, if any.
    #[must_use]
    pub const fn strategy(&self) -> Option<Strategy> {
        self.options.strategy
    }

    /// Replaces the strategy; `None` hands control back to the caller.
    pub const fn set_strategy(&mut self, strategy: Option<Strategy>) {
        self.options.strategy = strategy;
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Returns the bet for the current round, 0 while betting.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Returns the status line for the last transition.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player_hand.value()
    }

    /// Returns the dealer's full score, including the hole card.
    #[must_use]
    pub fn dealer_score(&self) -> u32 {
        self.dealer_hand.value()
    }

    /// Returns whether the dealer's hole card is face up.
    ///
    /// The hole card stays hidden until the player's turn is over.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        !matches!(
            self.state,
            GameState::Betting | GameState::Dealing | GameState::PlayerTurn
        )
    }

    /// Returns the dealer score the player is allowed to see.
    #[must_use]
    pub fn dealer_visible_score(&self) -> u32 {
        if self.is_hole_revealed() {
            self.dealer_hand.value()
        } else {
            u32::from(self.dealer_hand.up_card_value())
        }
    }

    /// Returns the result of the round, once resolved.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, for stacking a known card order.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }
}
