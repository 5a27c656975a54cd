//! Round result types.

use core::fmt;

/// How a round was decided, in the order the checks are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Both hands are blackjacks.
    BothBlackjack,
    /// Only the player has blackjack.
    PlayerBlackjack,
    /// Only the dealer has blackjack.
    DealerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher score.
    PlayerWin,
    /// Dealer has the higher score.
    DealerWin,
    /// Equal scores.
    Push,
}

impl RoundOutcome {
    /// Returns whether the player won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin)
    }

    /// Returns whether the player lost.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(
            self,
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerWin
        )
    }

    /// Returns whether the round was a tie.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::BothBlackjack | Self::Push)
    }

    /// Status line shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BothBlackjack => "Push! Both have Blackjack!",
            Self::PlayerBlackjack => "Player Blackjack!",
            Self::DealerBlackjack => "Dealer Blackjack!",
            Self::PlayerBust => "Player Busts! Dealer wins.",
            Self::DealerBust => "Dealer Busts! Player wins!",
            Self::PlayerWin => "Player wins!",
            Self::DealerWin => "Dealer wins.",
            Self::Push => "Push! (Tie)",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: RoundOutcome,
    /// The stake for the round.
    pub bet: i64,
    /// Signed payout: positive on a win, `-bet` on a loss, 0 on a push.
    pub payout: i64,
    /// The player's final hand value.
    pub player_value: u32,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Balance before the round was settled.
    pub balance_before: i64,
    /// Balance after the round was settled.
    pub balance_after: i64,
}

impl RoundResult {
    /// Change in balance caused by settling the round.
    ///
    /// A push returns the stake on top of a zero payout, so this is `+bet`
    /// for a push even though the payout is 0.
    #[must_use]
    pub const fn net(&self) -> i64 {
        self.balance_after.saturating_sub(self.balance_before)
    }
}
