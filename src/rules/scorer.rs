//! End-of-match scoring.
//!
//! Every seat's score is the sum of its four slot values, face down or
//! not; lowest score wins. The tie-break is explicit because it is the
//! most disputed rule in this game family: a cambio caller tied for the
//! lowest score loses the tie (a false call must not pay off), and the
//! remaining tied seats split the win. Winners split a reward of `1.0`
//! equally; every other seat receives `-1.0`.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, SeatId, SeatMap};

/// Reward handed to each seat that did not win.
pub const LOSER_REWARD: f32 = -1.0;

/// Final standings of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Point total per seat.
    pub scores: SeatMap<i32>,
    /// Seats that won, after the tie-break. Never empty.
    pub winners: Vec<SeatId>,
    /// Terminal reward per seat.
    pub rewards: SeatMap<f32>,
}

impl MatchOutcome {
    /// Whether a seat is among the winners.
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        self.winners.contains(&seat)
    }
}

/// Score a finished match.
///
/// Meaningful once the match has ended; the computation itself only reads
/// hands and the caller, so evaluating a mid-game state is harmless.
#[must_use]
pub fn score(state: &GameState) -> MatchOutcome {
    let seat_count = state.seat_count();
    let scores = SeatMap::new(seat_count, |seat| state.hand(seat).point_total());

    let min = SeatId::all(seat_count)
        .map(|seat| scores[seat])
        .min()
        .unwrap_or(0);

    let mut winners: Vec<SeatId> = SeatId::all(seat_count)
        .filter(|&seat| scores[seat] == min)
        .collect();

    // A caller tied with anyone else loses the tie; a caller alone at the
    // bottom wins outright.
    if winners.len() > 1 {
        if let Some(caller) = state.cambio_caller() {
            if winners.contains(&caller) {
                winners.retain(|&seat| seat != caller);
            }
        }
    }

    let share = 1.0 / winners.len() as f32;
    let rewards = SeatMap::new(seat_count, |seat| {
        if winners.contains(&seat) {
            share
        } else {
            LOSER_REWARD
        }
    });

    MatchOutcome {
        scores,
        winners,
        rewards,
    }
}
