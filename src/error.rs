//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero or negative.
    #[error("bet must be positive")]
    NonPositive,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
}

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The shoe is still empty after a reshuffle attempt.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

/// Error returned when a strategy name is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown strategy name")]
pub struct ParseStrategyError;

/// Errors that can occur while playing a full automated round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A card could not be drawn.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// No strategy is configured to make the player's decisions.
    #[error("no strategy configured for automated play")]
    NoStrategy,
    /// The round finished without a settled result.
    #[error("round ended without a result")]
    Unresolved,
}
