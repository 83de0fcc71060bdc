//! The reset/step boundary agents and trainers talk to.
//!
//! `CambioEnv` owns exactly one match at a time. `step` routes the
//! submitted action through the resolver as the seat currently to act,
//! then hands back the *next* actor's masked observation, a scalar
//! reward, a termination flag, and the error tag of a rejected action.
//!
//! Rewards: `0.0` while the match runs; a configurable shaping penalty on
//! a rejected action; on the step that finishes the match, the acting
//! seat's terminal reward. The full per-seat reward vector is available
//! through [`CambioEnv::outcome`] once `done` is set.
//!
//! Trainers running matches in parallel instantiate one env per match;
//! nothing here is shared.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Action, ActionRecord, GameError, GameState, Phase, SeatId, MAX_SEATS, MIN_SEATS};
use crate::rules::{legal_actions, resolve, score, MatchOutcome};

use super::observation::Observation;

/// Default shaping penalty for a rejected action.
pub const DEFAULT_ILLEGAL_ACTION_PENALTY: f32 = -0.1;

/// What one `step` call produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Masked view for the seat to act next (or the final view when done).
    pub observation: Observation,
    /// Scalar reward for the seat that acted.
    pub reward: f32,
    /// True once the match has ended, normally or by abort.
    pub done: bool,
    /// Error tag of a rejected action, for diagnostics.
    pub info: Option<GameError>,
}

/// Configuration for [`CambioEnv`].
pub struct CambioEnvBuilder {
    seat_count: usize,
    illegal_action_penalty: f32,
}

impl Default for CambioEnvBuilder {
    fn default() -> Self {
        Self {
            seat_count: 2,
            illegal_action_penalty: DEFAULT_ILLEGAL_ACTION_PENALTY,
        }
    }
}

impl CambioEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats at the table (2-6).
    pub fn seat_count(mut self, count: usize) -> Self {
        assert!(
            (MIN_SEATS..=MAX_SEATS).contains(&count),
            "Seat count must be {MIN_SEATS}-{MAX_SEATS}"
        );
        self.seat_count = count;
        self
    }

    /// Reward shaping for rejected actions. Usually negative or zero.
    pub fn illegal_action_penalty(mut self, penalty: f32) -> Self {
        self.illegal_action_penalty = penalty;
        self
    }

    /// Build the environment and deal the first match.
    pub fn build(self, seed: u64) -> CambioEnv {
        CambioEnv {
            seat_count: self.seat_count,
            illegal_action_penalty: self.illegal_action_penalty,
            state: GameState::new(self.seat_count, seed),
        }
    }
}

/// A single-match Cambio environment.
pub struct CambioEnv {
    seat_count: usize,
    illegal_action_penalty: f32,
    state: GameState,
}

impl CambioEnv {
    /// Environment with default configuration.
    #[must_use]
    pub fn new(seat_count: usize, seed: u64) -> Self {
        CambioEnvBuilder::new().seat_count(seat_count).build(seed)
    }

    /// Deal a fresh match and return the first actor's observation.
    pub fn reset(&mut self, seed: u64) -> Observation {
        info!(seats = self.seat_count, seed, "match reset");
        self.state = GameState::new(self.seat_count, seed);
        self.observe(self.state.current_seat())
    }

    /// Submit the current seat's action.
    pub fn step(&mut self, action: Action) -> Step {
        if self.state.phase().is_terminal() {
            // Stepping a finished match: report it, change nothing.
            return Step {
                observation: self.observe(self.state.current_seat()),
                reward: 0.0,
                done: true,
                info: Some(GameError::IllegalAction),
            };
        }

        let actor = self.state.current_seat();
        match resolve(&mut self.state, actor, action) {
            Ok(_) => {
                let done = self.state.phase().is_terminal();
                let reward = if self.state.phase() == Phase::GameOver {
                    score(&self.state).rewards[actor]
                } else {
                    0.0
                };
                Step {
                    observation: self.observe(self.state.current_seat()),
                    reward,
                    done,
                    info: None,
                }
            }
            Err(err) => {
                let done = self.state.phase().is_terminal();
                let reward = if err.is_fatal() {
                    0.0
                } else {
                    self.illegal_action_penalty
                };
                Step {
                    observation: self.observe(self.state.current_seat()),
                    reward,
                    done,
                    info: Some(err),
                }
            }
        }
    }

    /// Any seat's masked view of the current state.
    #[must_use]
    pub fn observe(&self, viewer: SeatId) -> Observation {
        Observation::of(&self.state, viewer)
    }

    /// Legal actions for the seat to act; empty once the match has ended.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        legal_actions(&self.state)
    }

    /// The seat currently to act.
    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.state.current_seat()
    }

    /// Whether the match has ended, normally or by abort.
    #[must_use]
    pub fn done(&self) -> bool {
        self.state.phase().is_terminal()
    }

    /// Final standings, once the match finished normally.
    ///
    /// `None` while the match runs and after an abort: an aborted match
    /// has no standings.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        (self.state.phase() == Phase::GameOver).then(|| score(&self.state))
    }

    /// The append-only audit log of resolved actions.
    #[must_use]
    pub fn round_log(&self) -> &Vector<ActionRecord> {
        self.state.round_log()
    }

    /// Read access to the raw state, for audit and debugging harnesses.
    /// Mutation stays inside the resolver.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
