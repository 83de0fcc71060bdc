//! Turn and phase control.
//!
//! Two responsibilities: enumerate the legal action set for the seat to
//! act (the RL action mask), and advance the table at the end of a turn,
//! including the final-round countdown once cambio is called.
//!
//! Phase sequence per turn: `AwaitingDraw` → `DecidingDrawnCard` →
//! optional `ResolvingPower` → end of turn. The end-of-turn transition is
//! where `GameOver` is detected; `Aborted` is reached only through the
//! fatal empty-pile path in the resolver.

use crate::core::{Action, GameState, PendingPower, Phase, SeatId, HAND_SIZE};

/// Every action the seat to act may legally take right now.
///
/// Empty once the match has ended. The resolver accepts exactly this set
/// and nothing else, so the enumeration doubles as an action mask.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    let actor = state.current_seat();

    match state.phase() {
        Phase::AwaitingDraw => {
            let mut actions = vec![Action::Draw];
            if state.cambio_caller().is_none() {
                actions.push(Action::CallCambio);
            }
            actions
        }
        Phase::DecidingDrawnCard => {
            let mut actions = vec![Action::DiscardDrawn];
            for slot in 0..HAND_SIZE {
                actions.push(Action::SwapDrawn { slot });
            }
            if state.cambio_caller().is_none() {
                actions.push(Action::CallCambio);
            }
            actions
        }
        Phase::ResolvingPower => {
            let mut actions = vec![Action::SkipPower];
            match state.pending_power() {
                Some(PendingPower::PeekOwn) => {
                    for slot in 0..HAND_SIZE {
                        actions.push(Action::PeekOwn { slot });
                    }
                }
                Some(PendingPower::PeekOther | PendingPower::KingLook) => {
                    for seat in other_seats(state, actor) {
                        for slot in 0..HAND_SIZE {
                            actions.push(Action::PeekOther { seat, slot });
                        }
                    }
                }
                Some(PendingPower::BlindSwap) => {
                    for own_slot in 0..HAND_SIZE {
                        for seat in other_seats(state, actor) {
                            for slot in 0..HAND_SIZE {
                                actions.push(Action::BlindSwap {
                                    own_slot,
                                    seat,
                                    slot,
                                });
                            }
                        }
                    }
                }
                Some(PendingPower::KingDecide { seat, slot }) => {
                    for own_slot in 0..HAND_SIZE {
                        actions.push(Action::BlindSwap {
                            own_slot,
                            seat,
                            slot,
                        });
                    }
                }
                None => {}
            }
            actions
        }
        Phase::GameOver | Phase::Aborted => Vec::new(),
    }
}

fn other_seats(state: &GameState, actor: SeatId) -> impl Iterator<Item = SeatId> {
    SeatId::all(state.seat_count()).filter(move |&s| s != actor)
}

/// Close the current turn: clear per-turn state, advance the seat, tick
/// the final-round countdown, and detect the end of the match.
///
/// The cambio caller's own closing turn does not consume a countdown
/// tick; every seat after the caller gets exactly one more turn.
pub(crate) fn end_turn(state: &mut GameState) {
    debug_assert!(
        state.drawn().is_none(),
        "a held drawn card must reach a pile before the turn ends"
    );
    state.set_pending_power(None);

    if let (Some(left), Some(caller)) = (state.final_turns_left(), state.cambio_caller()) {
        if state.current_seat() != caller {
            let left = left.saturating_sub(1);
            state.set_final_turns_left(Some(left));
            if left == 0 {
                state.set_phase(Phase::GameOver);
                return;
            }
        }
    }

    let next = state.current_seat().next(state.seat_count());
    state.set_current_seat(next);
    state.bump_turn();
    state.set_phase(Phase::AwaitingDraw);
}
