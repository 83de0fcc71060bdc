//! Core match types: cards, piles, seats, hands, actions, state, RNG.
//!
//! Everything here is data. Legality and mutation rules live in
//! `crate::rules`; masking lives in `crate::env`.

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod rng;
pub mod seat;
pub mod state;

pub use action::{Action, ActionRecord, Outcome, Reveal};
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use hand::{Hand, HAND_SIZE};
pub use rng::{GameRng, GameRngState};
pub use seat::{SeatId, SeatMap};
pub use state::{GameState, PendingPower, Phase, INITIAL_PEEKS, MAX_SEATS, MIN_SEATS};
