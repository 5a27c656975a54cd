//! Game state types.

/// Game state.
///
/// A round moves through the states in declaration order and returns to
/// [`Betting`](Self::Betting) on [`Game::reset_round`](super::Game::reset_round).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Accepting a bet for the next round.
    Betting,
    /// Bet placed, waiting for the initial deal.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been resolved and paid out.
    RoundOver,
}
