use alloc::format;

use crate::error::DrawError;
use crate::options::RoundingMode;
use crate::result::{RoundOutcome, RoundResult};

use super::{DEALER_STAND_THRESHOLD, Game, GameState};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => amount.ceil() as i64,
        RoundingMode::Down => amount.floor() as i64,
        RoundingMode::Nearest => amount.round() as i64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as i64,
        RoundingMode::Down => libm::floor(amount) as i64,
        RoundingMode::Nearest => libm::round(amount) as i64,
    }
}

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while below [`DEALER_STAND_THRESHOLD`] and stands on
    /// anything from 17 up, soft or hard. The round is always resolved
    /// afterwards.
    ///
    /// Returns whether the dealer drew any card; `Ok(false)` also covers a
    /// call outside [`GameState::DealerTurn`], which does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is empty even after a reshuffle.
    pub fn dealer_play(&mut self) -> Result<bool, DrawError> {
        if self.state != GameState::DealerTurn {
            return Ok(false);
        }

        let mut score = self.dealer_hand.value();
        let mut drew = false;

        while score < DEALER_STAND_THRESHOLD {
            log::debug!("dealer has {score}, dealer hits");
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            score = self.dealer_hand.value();
            drew = true;
            self.message = format!("Dealer has {score}");
        }

        if score > 21 {
            self.message = format!("Dealer Busts! Score: {score}");
        } else if !drew {
            self.message = format!("Dealer Stands. Score: {score}");
        }

        self.resolve();
        Ok(drew)
    }

    /// Decides the round and settles the balance.
    ///
    /// Resolving is idempotent: once the game is in
    /// [`GameState::RoundOver`] further calls return `None` and leave the
    /// balance alone.
    ///
    /// Checks are made in this order: both blackjack (push), player
    /// blackjack (pays the blackjack ratio, rounded), dealer blackjack, player
    /// bust, dealer bust, then the higher score. The payout is added to the
    /// balance, and on a push the stake is added back as well. The balance
    /// saturates at `i64::MAX` and `i64::MIN` instead of overflowing.
    pub fn resolve(&mut self) -> Option<RoundResult> {
        if self.state == GameState::RoundOver {
            return None;
        }
        Some(self.settle())
    }

    fn settle(&mut self) -> RoundResult {
        self.state = GameState::RoundOver;

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let player_blackjack = self.player_hand.is_blackjack();
        let dealer_blackjack = self.dealer_hand.is_blackjack();
        let bet = self.bet;

        let (outcome, payout) = if player_blackjack && dealer_blackjack {
            (RoundOutcome::BothBlackjack, 0)
        } else if player_blackjack {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * self.options.blackjack_pays;
            (
                RoundOutcome::PlayerBlackjack,
                round_amount(winnings, self.options.rounding_blackjack),
            )
        } else if dealer_blackjack {
            (RoundOutcome::DealerBlackjack, -bet)
        } else if player_value > 21 {
            (RoundOutcome::PlayerBust, -bet)
        } else if dealer_value > 21 {
            (RoundOutcome::DealerBust, bet)
        } else if player_value > dealer_value {
            (RoundOutcome::PlayerWin, bet)
        } else if dealer_value > player_value {
            (RoundOutcome::DealerWin, -bet)
        } else {
            (RoundOutcome::Push, 0)
        };

        // Settlement saturates at the i64 bounds; float-to-int casts in
        // `round_amount` saturate as well.
        let balance_before = self.balance;
        self.balance = self.balance.saturating_add(payout);
        if payout == 0 {
            self.balance = self.balance.saturating_add(bet);
        }

        let result = RoundResult {
            outcome,
            bet,
            payout,
            player_value,
            dealer_value,
            balance_before,
            balance_after: self.balance,
        };

        log::info!(
            "round over: {outcome} player {player_value} dealer {dealer_value}, bet {bet}, payout {payout}, balance {}",
            self.balance
        );

        self.message = format!("{outcome} | Balance: €{}", self.balance);
        self.last_result = Some(result);
        result
    }
}
