//! # cambio-engine
//!
//! A rules-faithful simulator for the card game Cambio, built as a
//! training and evaluation environment for reinforcement-learning agents.
//!
//! ## Design Principles
//!
//! 1. **Exact hidden information**: who may know which card is explicit
//!    data: a `(viewer, slot)` knowledge mask per hand, recomputed by
//!    every mutating operation, never inferred from card identity.
//!
//! 2. **Atomic resolution**: one synchronous `resolve` call per agent
//!    decision. A rejected action leaves the state untouched so agents can
//!    retry; illegal attempts are penalized through reward, not crashes.
//!
//! 3. **Deterministic replay**: one seeded ChaCha8 stream per match; the
//!    same seed and action sequence reproduce the same match exactly.
//!
//! ## Modules
//!
//! - `core`: cards, piles, seats, hands, actions, state, RNG
//! - `rules`: legality, the power table, resolution, scoring
//! - `env`: masked per-seat observations and the reset/step boundary
//!
//! ## Quick start
//!
//! ```
//! use cambio_engine::{Action, CambioEnv};
//!
//! let mut env = CambioEnv::new(2, 42);
//! let obs = env.reset(42);
//! assert!(obs.legal_actions.contains(&Action::Draw));
//!
//! let step = env.step(Action::Draw);
//! assert!(!step.done);
//! ```

pub mod core;
pub mod env;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, Deck, GameError, GameRng, GameRngState, GameState, Hand, Outcome,
    PendingPower, Phase, Rank, Reveal, SeatId, SeatMap, Suit, HAND_SIZE, INITIAL_PEEKS, MAX_SEATS,
    MIN_SEATS,
};

pub use crate::rules::{legal_actions, power_of, resolve, score, MatchOutcome, LOSER_REWARD};

pub use crate::env::{
    CambioEnv, CambioEnvBuilder, Observation, SlotView, Step, DEFAULT_ILLEGAL_ACTION_PENALTY,
};
