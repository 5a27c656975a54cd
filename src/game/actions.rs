use alloc::format;
use alloc::string::ToString;

use crate::card::Card;
use crate::error::{DrawError, RoundError};
use crate::result::RoundResult;
use crate::strategy::Action;

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the round at once; reaching exactly 21 hands the turn
    /// to the dealer. Returns `Ok(None)` without drawing outside the player's
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is empty even after a reshuffle.
    pub fn hit(&mut self) -> Result<Option<Card>, DrawError> {
        if self.state != GameState::PlayerTurn {
            return Ok(None);
        }

        let card = self.draw()?;
        self.player_hand.add_card(card);

        let score = self.player_hand.value();
        if score > 21 {
            self.message = format!("Player Busts! Score: {score}");
            self.resolve();
        } else if score == 21 {
            self.message = "Player has 21! Dealer's turn.".to_string();
            self.state = GameState::DealerTurn;
        } else {
            self.message = format!("Player Hits. Score: {score}");
        }

        Ok(Some(card))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Returns `false` without doing anything outside the player's turn.
    pub fn stand(&mut self) -> bool {
        if self.state != GameState::PlayerTurn {
            return false;
        }

        let score = self.player_hand.value();
        self.message = format!("Player Stands. Score: {score}. Dealer's Turn.");
        self.state = GameState::DealerTurn;
        true
    }

    /// Lets the configured strategy take one player action.
    ///
    /// Returns the action taken, or `Ok(None)` if no strategy is configured
    /// or it is not the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if a hit finds the shoe empty even after a reshuffle.
    pub fn ai_action(&mut self) -> Result<Option<Action>, DrawError> {
        let Some(strategy) = self.options.strategy else {
            return Ok(None);
        };
        if self.state != GameState::PlayerTurn {
            return Ok(None);
        }

        let score = self.player_hand.value();
        let upcard = self.dealer_hand.up_card_value();
        let action = strategy.decide(score, upcard);
        log::debug!("{strategy}: {action:?} on {score} against dealer {upcard}");

        match action {
            Action::Hit => {
                self.hit()?;
            }
            Action::Stand => {
                self.stand();
            }
        }

        Ok(Some(action))
    }

    /// Plays a whole round with the configured strategy.
    ///
    /// Places `bet`, deals, lets the strategy act until its turn is over,
    /// plays the dealer and returns the resolved result. The game is left in
    /// [`GameState::RoundOver`]; call [`reset_round`](Self::reset_round)
    /// before the next round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoStrategy`] if no strategy is configured, or the
    /// bet or draw error that stopped the round. [`RoundError::Unresolved`]
    /// means the round ended without being settled.
    pub fn play_round(&mut self, bet: i64) -> Result<RoundResult, RoundError> {
        if self.options.strategy.is_none() {
            return Err(RoundError::NoStrategy);
        }

        self.place_bet(bet)?;
        self.deal_initial_cards()?;

        while self.state == GameState::PlayerTurn {
            self.ai_action()?;
        }

        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
        }

        self.last_result.ok_or(RoundError::Unresolved)
    }
}
