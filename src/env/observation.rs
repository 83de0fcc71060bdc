//! Per-viewer masked observations.
//!
//! An observation is everything one seat is entitled to see: public table
//! facts, plus hand slots filtered through that viewer's own knowledge
//! mask. Own and opponents' hands are masked by the same rule: a slot is
//! `Known` exactly when an explicit reveal granted it to this viewer, so
//! no derivation here can leak hidden information.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Card, GameState, PendingPower, Phase, SeatId, SeatMap, HAND_SIZE};
use crate::rules::legal_actions;

/// One hand slot as a viewer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotView {
    /// The viewer's mask records this slot; the card identity is included.
    Known(Card),
    /// Face down for this viewer.
    Hidden,
}

impl SlotView {
    /// The card, if this viewer knows it.
    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            SlotView::Known(card) => Some(card),
            SlotView::Hidden => None,
        }
    }
}

/// What one seat sees of the match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// The seat this view belongs to.
    pub viewer: SeatId,
    /// Seats at the table.
    pub seat_count: usize,
    /// Every hand through the viewer's mask, own hand included.
    pub hands: SeatMap<[SlotView; HAND_SIZE]>,
    /// The held drawn card, present only while the viewer is the seat
    /// holding it.
    pub drawn: Option<Card>,
    /// Visible top of the discard pile.
    pub top_discard: Option<Card>,
    /// Cards left in the draw pile.
    pub draw_pile_size: usize,
    /// The seat to act.
    pub current_seat: SeatId,
    /// Current phase.
    pub phase: Phase,
    /// Power sub-step awaiting a decision, if any. Which slot a King
    /// looked at is public; the card seen is not.
    pub pending_power: Option<PendingPower>,
    /// Who called cambio, if anyone.
    pub cambio_caller: Option<SeatId>,
    /// Turn number, starting at 1.
    pub turn_number: u32,
    /// Legal actions, populated only when the viewer is the seat to act.
    pub legal_actions: Vec<Action>,
}

impl Observation {
    /// Derive the masked view of `state` for one viewer.
    #[must_use]
    pub fn of(state: &GameState, viewer: SeatId) -> Self {
        let hands = SeatMap::new(state.seat_count(), |seat| {
            let hand = state.hand(seat);
            std::array::from_fn(|slot| {
                if hand.knows(viewer, slot) {
                    SlotView::Known(hand.card(slot))
                } else {
                    SlotView::Hidden
                }
            })
        });

        let is_actor = viewer == state.current_seat();

        Self {
            viewer,
            seat_count: state.seat_count(),
            hands,
            drawn: if is_actor { state.drawn() } else { None },
            top_discard: state.deck().top_discard(),
            draw_pile_size: state.deck().draw_size(),
            current_seat: state.current_seat(),
            phase: state.phase(),
            pending_power: state.pending_power(),
            cambio_caller: state.cambio_caller(),
            turn_number: state.turn_number(),
            legal_actions: if is_actor {
                legal_actions(state)
            } else {
                Vec::new()
            },
        }
    }

    /// The viewer's view of its own hand.
    #[must_use]
    pub fn own_hand(&self) -> &[SlotView; HAND_SIZE] {
        &self.hands[self.viewer]
    }
}
