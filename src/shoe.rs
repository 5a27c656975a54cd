//! Multi-deck shoe.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DrawError;

/// A shuffled stack of one or more standard decks.
///
/// Cards are drawn from the end of the sequence. Once fewer than a quarter of
/// the cards remain the shoe reports [`needs_reshuffle`](Self::needs_reshuffle),
/// and [`reshuffle`](Self::reshuffle) rebuilds it in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
}

impl Shoe {
    /// Builds and shuffles a shoe with the given number of decks.
    ///
    /// A deck count of zero is clamped to one.
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let decks = decks.max(1);
        Self {
            cards: Self::build(decks, rng),
            decks,
        }
    }

    fn build<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyShoe`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyShoe)
    }

    /// Remaining-card count below which the shoe must be rebuilt.
    #[must_use]
    pub const fn reshuffle_threshold(&self) -> usize {
        self.capacity() / 4
    }

    /// Returns whether fewer cards remain than the reshuffle threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.len() < self.reshuffle_threshold()
    }

    /// Replaces the contents with a freshly built and shuffled shoe.
    ///
    /// Cards drawn before the reshuffle are not returned to the shoe.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = Self::build(self.decks, rng);
    }

    /// Replaces the contents so that `draws` come out in the given order.
    ///
    /// Anything beyond the shoe's capacity is dropped from the end.
    pub fn stack(&mut self, draws: &[Card]) {
        let take = draws.len().min(self.capacity());
        self.cards = draws[..take].iter().rev().copied().collect();
    }

    /// Number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first; the last card is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
