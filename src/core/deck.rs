//! Draw and discard piles.
//!
//! The draw pile is a hidden ordered sequence (top = end of the vec, as
//! elsewhere in the engine); the discard pile is face up with only its top
//! card visible and reachable. Nothing reorders the draw pile except the
//! reshuffle-on-empty path, which keeps peek-based powers meaningful: a
//! card seen in a hand stays where it is until an action moves it.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::GameError;
use super::rng::GameRng;

/// The shared draw and discard piles of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Build the full 54-card deck and shuffle it with the match RNG.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut draw_pile = Card::standard_deck();
        rng.shuffle(&mut draw_pile);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Build a deck from explicit piles (top = end of each vec).
    ///
    /// For tests and replay; normal matches start from [`Deck::standard`].
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Card>, discard_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile,
        }
    }

    /// Draw the top card of the draw pile.
    ///
    /// If the draw pile is empty, the discard pile minus its visible top
    /// card is reshuffled into a new draw pile first. Errors with
    /// [`GameError::EmptyPile`] if both piles would be empty; the deck is
    /// left unchanged in that case.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.draw_pile.is_empty() {
            self.reshuffle(rng)?;
        }
        self.draw_pile.pop().ok_or(GameError::EmptyPile)
    }

    /// Push a card face up onto the discard pile.
    ///
    /// The previous top card stays in the pile but is no longer visible.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// The visible top card of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Number of cards in the draw pile.
    #[must_use]
    pub fn draw_size(&self) -> usize {
        self.draw_pile.len()
    }

    /// Number of cards in the discard pile.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard_pile.len()
    }

    /// Total cards across both piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Turn the discard pile minus its top card into a new draw pile.
    fn reshuffle(&mut self, rng: &mut GameRng) -> Result<(), GameError> {
        let Some(top) = self.discard_pile.pop() else {
            return Err(GameError::EmptyPile);
        };
        if self.discard_pile.is_empty() {
            // Only the visible card is left; nothing to recycle.
            self.discard_pile.push(top);
            return Err(GameError::EmptyPile);
        }
        std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);
        rng.shuffle(&mut self.draw_pile);
        self.discard_pile.push(top);
        Ok(())
    }
}
