//! Action resolution.
//!
//! [`resolve`] is the only code path that mutates hands or piles. It
//! validates the actor, phase, and targets before touching anything, so a
//! rejected action leaves the state bit-for-bit unchanged and the same
//! seat may retry (illegal attempts are a reward-shaping concern, not a
//! crash). Revealed cards come back in the [`Outcome`] tagged with the one
//! viewer allowed to see them.
//!
//! The empty-pile condition is the single fatal error: it flips the phase
//! to [`Phase::Aborted`] instead of allowing a retry.

use smallvec::smallvec;
use tracing::{debug, info};

use crate::core::{
    Action, ActionRecord, GameError, GameState, Outcome, PendingPower, Phase, Reveal, SeatId,
    HAND_SIZE,
};

use super::powers::power_of;
use super::turn::end_turn;

/// Apply one action for one seat.
///
/// On success the state has advanced, the action is in the round log, and
/// the returned [`Outcome`] carries any private reveals. On failure the
/// state is unchanged, except for the fatal [`GameError::EmptyPile`],
/// which aborts the match.
pub fn resolve(
    state: &mut GameState,
    seat: SeatId,
    action: Action,
) -> Result<Outcome, GameError> {
    if state.phase().is_terminal() || seat != state.current_seat() {
        debug!(seat = %seat, ?action, "rejected: not this seat's turn");
        return Err(GameError::IllegalAction);
    }

    let turn = state.turn_number();
    let result = match state.phase() {
        Phase::AwaitingDraw => awaiting_draw(state, seat, action),
        Phase::DecidingDrawnCard => deciding_drawn(state, seat, action),
        Phase::ResolvingPower => resolving_power(state, seat, action),
        Phase::GameOver | Phase::Aborted => Err(GameError::IllegalAction),
    };

    match result {
        Ok(outcome) => {
            debug!(seat = %seat, ?action, phase = ?state.phase(), "resolved");
            state.record(ActionRecord::new(seat, turn, action, outcome.clone()));
            if state.phase() == Phase::GameOver {
                info!(turns = state.turn_number(), "match over");
            }
            Ok(outcome)
        }
        Err(err) => {
            if err.is_fatal() {
                state.set_phase(Phase::Aborted);
                info!(seat = %seat, %err, "match aborted");
            } else {
                debug!(seat = %seat, ?action, %err, "rejected");
            }
            Err(err)
        }
    }
}

fn awaiting_draw(state: &mut GameState, seat: SeatId, action: Action) -> Result<Outcome, GameError> {
    match action {
        Action::Draw => {
            let card = state.draw_from_pile()?;
            state.set_drawn(Some(card));
            state.set_phase(Phase::DecidingDrawnCard);
            Ok(Outcome {
                reveals: smallvec![Reveal::Drawn { viewer: seat, card }],
                discarded: None,
            })
        }
        Action::CallCambio => call_cambio(state, seat),
        _ => Err(GameError::IllegalAction),
    }
}

fn deciding_drawn(state: &mut GameState, seat: SeatId, action: Action) -> Result<Outcome, GameError> {
    // Phase invariant: a card is held while deciding.
    let drawn = state.drawn().ok_or(GameError::IllegalAction)?;

    match action {
        Action::DiscardDrawn => {
            state.set_drawn(None);
            state.discard(drawn);
            match power_of(drawn) {
                Some(pending) => {
                    state.set_pending_power(Some(pending));
                    state.set_phase(Phase::ResolvingPower);
                }
                None => end_turn(state),
            }
            Ok(Outcome {
                reveals: smallvec![],
                discarded: Some(drawn),
            })
        }
        Action::SwapDrawn { slot } => {
            if slot >= HAND_SIZE {
                return Err(GameError::InvalidTarget);
            }
            state.set_drawn(None);
            let displaced = state.hand_mut(seat).replace(slot, drawn);
            // The actor looked at the drawn card before placing it.
            state.hand_mut(seat).grant(seat, slot);
            state.discard(displaced);
            // A displaced card never triggers its power.
            end_turn(state);
            Ok(Outcome {
                reveals: smallvec![],
                discarded: Some(displaced),
            })
        }
        Action::CallCambio => call_cambio(state, seat),
        _ => Err(GameError::IllegalAction),
    }
}

fn resolving_power(
    state: &mut GameState,
    seat: SeatId,
    action: Action,
) -> Result<Outcome, GameError> {
    let pending = state.pending_power().ok_or(GameError::IllegalAction)?;

    match (pending, action) {
        (_, Action::SkipPower) => {
            end_turn(state);
            Ok(Outcome::none())
        }
        (PendingPower::PeekOwn, Action::PeekOwn { slot }) => {
            if slot >= HAND_SIZE {
                return Err(GameError::InvalidTarget);
            }
            let card = state.hand_mut(seat).peek(seat, slot);
            end_turn(state);
            Ok(Outcome {
                reveals: smallvec![Reveal::Slot {
                    viewer: seat,
                    seat,
                    slot,
                    card,
                }],
                discarded: None,
            })
        }
        (PendingPower::PeekOther, Action::PeekOther { seat: target, slot }) => {
            check_other(state, seat, target, slot)?;
            let card = state.hand_mut(target).peek(seat, slot);
            end_turn(state);
            Ok(Outcome {
                reveals: smallvec![Reveal::Slot {
                    viewer: seat,
                    seat: target,
                    slot,
                    card,
                }],
                discarded: None,
            })
        }
        (PendingPower::KingLook, Action::PeekOther { seat: target, slot }) => {
            check_other(state, seat, target, slot)?;
            let card = state.hand_mut(target).peek(seat, slot);
            // The swap decision follows; the turn is not over yet.
            state.set_pending_power(Some(PendingPower::KingDecide { seat: target, slot }));
            Ok(Outcome {
                reveals: smallvec![Reveal::Slot {
                    viewer: seat,
                    seat: target,
                    slot,
                    card,
                }],
                discarded: None,
            })
        }
        (
            PendingPower::BlindSwap,
            Action::BlindSwap {
                own_slot,
                seat: target,
                slot,
            },
        ) => {
            if own_slot >= HAND_SIZE {
                return Err(GameError::InvalidTarget);
            }
            check_other(state, seat, target, slot)?;
            // Neither party sees the exchanged cards: all knowledge of both
            // slots is destroyed, the actor's included.
            state.blind_swap(seat, own_slot, target, slot);
            end_turn(state);
            Ok(Outcome::none())
        }
        (
            PendingPower::KingDecide {
                seat: peeked_seat,
                slot: peeked_slot,
            },
            Action::BlindSwap {
                own_slot,
                seat: target,
                slot,
            },
        ) => {
            if own_slot >= HAND_SIZE {
                return Err(GameError::InvalidTarget);
            }
            if target != peeked_seat || slot != peeked_slot {
                // The King swap is pinned to the slot that was looked at.
                return Err(GameError::InvalidTarget);
            }
            let knew_own = state.hand(seat).knows(seat, own_slot);
            state.blind_swap(seat, own_slot, peeked_seat, peeked_slot);
            // The actor watched both cards move: the peeked card is now in
            // their own slot, and if they knew their outgoing card, they
            // know where it landed. Nobody else keeps anything.
            state.hand_mut(seat).grant(seat, own_slot);
            if knew_own {
                state.hand_mut(peeked_seat).grant(seat, peeked_slot);
            }
            end_turn(state);
            Ok(Outcome::none())
        }
        _ => Err(GameError::IllegalAction),
    }
}

fn call_cambio(state: &mut GameState, seat: SeatId) -> Result<Outcome, GameError> {
    if state.cambio_caller().is_some() {
        return Err(GameError::IllegalCall);
    }
    // A held drawn card goes to the pile without triggering its power.
    let discarded = state.drawn();
    if let Some(card) = discarded {
        state.set_drawn(None);
        state.discard(card);
    }
    state.mark_cambio(seat);
    info!(caller = %seat, "cambio called");
    end_turn(state);
    Ok(Outcome {
        reveals: smallvec![],
        discarded,
    })
}

fn check_other(
    state: &GameState,
    actor: SeatId,
    target: SeatId,
    slot: usize,
) -> Result<(), GameError> {
    if target == actor || target.index() >= state.seat_count() || slot >= HAND_SIZE {
        return Err(GameError::InvalidTarget);
    }
    Ok(())
}
