//! A seat's hand and who knows what about it.
//!
//! Every hand has exactly [`HAND_SIZE`] slots with stable indices: a swap
//! changes a slot's contents, never its identity, so knowledge entries stay
//! addressable across the whole match.
//!
//! Knowledge is tracked per viewer, not globally. The owner may know
//! different slots than an opponent who peeked, and a card is never
//! considered visible to a viewer unless an explicit reveal granted it.
//! Mutating a slot clears that slot's knowledge for *every* viewer; the
//! resolver re-grants knowledge only where the acting rule preserves it
//! (e.g. swapping in a drawn card the actor just looked at).

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::seat::{SeatId, SeatMap};

/// Number of card slots per hand.
pub const HAND_SIZE: usize = 4;

/// Four card slots plus a per-viewer knowledge mask.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: [Card; HAND_SIZE],
    /// `knowledge[viewer][slot]` is true when that viewer knows the slot.
    knowledge: SeatMap<[bool; HAND_SIZE]>,
}

impl Hand {
    /// Create a hand with the given cards, unknown to every viewer.
    #[must_use]
    pub fn new(slots: [Card; HAND_SIZE], seat_count: usize) -> Self {
        Self {
            slots,
            knowledge: SeatMap::with_value(seat_count, [false; HAND_SIZE]),
        }
    }

    /// The card currently in a slot, without granting knowledge.
    ///
    /// Engine-internal reads; anything surfaced to an agent goes through
    /// the observation layer, which applies the viewer's mask.
    #[must_use]
    pub fn card(&self, slot: usize) -> Card {
        self.slots[slot]
    }

    /// All four cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.slots
    }

    /// Whether a viewer currently knows a slot's contents.
    #[must_use]
    pub fn knows(&self, viewer: SeatId, slot: usize) -> bool {
        self.knowledge[viewer][slot]
    }

    /// Reveal a slot to a viewer and return the card.
    ///
    /// Never mutates hand contents.
    pub fn peek(&mut self, viewer: SeatId, slot: usize) -> Card {
        self.knowledge[viewer][slot] = true;
        self.slots[slot]
    }

    /// Mark a slot as known to a viewer without returning the card.
    pub fn grant(&mut self, viewer: SeatId, slot: usize) {
        self.knowledge[viewer][slot] = true;
    }

    /// Replace a slot's contents, returning the displaced card.
    ///
    /// The slot becomes unknown to every viewer; callers re-grant where the
    /// rule being resolved preserves the actor's knowledge.
    pub fn replace(&mut self, slot: usize, card: Card) -> Card {
        for (_, mask) in self.knowledge.iter_mut() {
            mask[slot] = false;
        }
        std::mem::replace(&mut self.slots[slot], card)
    }

    /// Sum of the hand's point values.
    #[must_use]
    pub fn point_total(&self) -> i32 {
        self.slots.iter().map(|c| c.point_value()).sum()
    }
}
