//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player against a
//! rule-based dealer: betting, the initial deal, hit/stand, dealer play and
//! payout. A [`Strategy`] can be injected to let a rule-based AI make the
//! player's decisions, and the [`simulation`] module drives many rounds per
//! strategy to compare them.
//!
//! # Example
//!
//! ```
//! use bjsim::{Game, GameOptions, Strategy};
//!
//! let options = GameOptions::default().with_strategy(Some(Strategy::BasicHard));
//! let mut game = Game::new(options, 42);
//! let result = game.play_round(50).unwrap();
//! assert_eq!(game.balance(), 1000 + result.net());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod simulation;
pub mod strategy;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use error::{BetError, DrawError, ParseStrategyError, RoundError};
pub use game::{DEALER_STAND_THRESHOLD, Game, GameState};
pub use hand::Hand;
pub use options::{GameOptions, RoundingMode};
pub use result::{RoundOutcome, RoundResult};
pub use shoe::Shoe;
pub use simulation::{RecordOutcome, RoundRecord, Summary};
pub use strategy::{Action, Strategy};
