//! Actions, resolution outcomes, and the round log record.
//!
//! The action space is a closed tagged variant: every decision an agent can
//! make in any phase is one of these constructors, so the legal-action set
//! is statically enumerable for RL action-space definitions. The resolver
//! interprets each variant against the current phase; nothing here carries
//! behavior.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::seat::SeatId;

/// A single agent decision.
///
/// Slot indices address the fixed four slots of a hand (0-3). `seat` fields
/// must name a seat other than the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take the top card of the draw pile.
    Draw,
    /// Send the drawn card to the discard pile. Discarding a power card
    /// opens its resolution phase.
    DiscardDrawn,
    /// Put the drawn card into an own slot; the displaced card is discarded
    /// without triggering a power.
    SwapDrawn { slot: usize },
    /// End the match after one final turn for every other seat.
    CallCambio,
    /// Power 7/8: look at an own slot. Also the King's look step when aimed
    /// through [`Action::PeekOther`].
    PeekOwn { slot: usize },
    /// Power 9/10 and the King's look step: look at another seat's slot.
    PeekOther { seat: SeatId, slot: usize },
    /// Power J/Q: exchange an own slot with another seat's slot, unseen.
    /// Also the King's optional swap, which must name the peeked slot.
    BlindSwap {
        own_slot: usize,
        seat: SeatId,
        slot: usize,
    },
    /// Decline the pending power (or the King's optional swap).
    SkipPower,
}

/// A card revealed during resolution, tagged with the single viewer who is
/// allowed to see it. Reveals are routed to that viewer's observation and
/// never broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reveal {
    /// The actor saw the card they drew.
    Drawn { viewer: SeatId, card: Card },
    /// A viewer saw the card in a hand slot.
    Slot {
        viewer: SeatId,
        seat: SeatId,
        slot: usize,
        card: Card,
    },
}

impl Reveal {
    /// The viewer this reveal is addressed to.
    #[must_use]
    pub fn viewer(&self) -> SeatId {
        match self {
            Reveal::Drawn { viewer, .. } | Reveal::Slot { viewer, .. } => *viewer,
        }
    }
}

/// What a successful resolution produced.
///
/// `discarded` is the card that landed face up on the discard pile, public
/// to everyone. `reveals` stay private to their tagged viewer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Private reveals. SmallVec: resolutions reveal at most a couple of
    /// cards, so this stays off the heap.
    pub reveals: SmallVec<[Reveal; 2]>,
    /// Card discarded face up by this action, if any.
    pub discarded: Option<Card>,
}

impl Outcome {
    /// An outcome with nothing revealed and nothing discarded.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// The reveals addressed to one viewer.
    pub fn reveals_for(&self, viewer: SeatId) -> impl Iterator<Item = &Reveal> {
        self.reveals.iter().filter(move |r| r.viewer() == viewer)
    }
}

/// One resolved action in the append-only round log.
///
/// Used for scoring audit, replay, and derived observations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub seat: SeatId,
    /// Turn number when the action resolved.
    pub turn: u32,
    /// The action taken.
    pub action: Action,
    /// What the resolution produced.
    pub outcome: Outcome,
}

impl ActionRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(seat: SeatId, turn: u32, action: Action, outcome: Outcome) -> Self {
        Self {
            seat,
            turn,
            action,
            outcome,
        }
    }
}
