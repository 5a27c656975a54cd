use alloc::format;
use alloc::string::ToString;

use crate::error::{BetError, DrawError};

use super::{Game, GameState};

impl Game {
    /// Places the bet for the round and moves to [`GameState::Dealing`].
    ///
    /// Clears the hands left over from the previous round. The balance is not
    /// debited; the stake only affects the balance when the round resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or the amount is
    /// not positive. The state is left unchanged.
    pub fn place_bet(&mut self, amount: i64) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount <= 0 {
            self.message = "Bet must be positive!".to_string();
            return Err(BetError::NonPositive);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.last_result = None;
        self.bet = amount;
        self.message = format!("Bet placed: €{amount}");
        self.state = GameState::Dealing;

        Ok(())
    }

    /// Places the configured default bet.
    ///
    /// # Errors
    ///
    /// See [`place_bet`](Self::place_bet).
    pub fn place_default_bet(&mut self) -> Result<(), BetError> {
        self.place_bet(self.options.default_bet)
    }

    /// Deals two cards each to the player and the dealer.
    ///
    /// Cards go player, dealer, player, dealer, so the dealer's upcard is the
    /// second card drawn. If either hand is a blackjack the round resolves
    /// immediately; otherwise the game moves to [`GameState::PlayerTurn`].
    ///
    /// Returns `Ok(false)` without dealing if the game is not in dealing
    /// state.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is empty even after a reshuffle.
    pub fn deal_initial_cards(&mut self) -> Result<bool, DrawError> {
        if self.state != GameState::Dealing {
            return Ok(false);
        }

        for to_player in [true, false, true, false] {
            let card = self.draw()?;
            if to_player {
                self.player_hand.add_card(card);
            } else {
                self.dealer_hand.add_card(card);
            }
        }

        if self.player_hand.is_blackjack() || self.dealer_hand.is_blackjack() {
            self.resolve();
        } else {
            self.message = "Player's Turn (Hit or Stand)".to_string();
            self.state = GameState::PlayerTurn;
        }

        Ok(true)
    }
}
