//! Engine error taxonomy.
//!
//! Every rejected action maps to exactly one of these tags. All of them are
//! recoverable in place (the state is left untouched and the same seat may
//! retry) except [`GameError::EmptyPile`], which aborts the match: both
//! piles running dry means the card-count invariant was violated or play
//! became pathological, and a trainer must be able to tell that apart from
//! a normally finished game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an action can be rejected, plus the single fatal condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum GameError {
    /// The action does not belong to the current phase's legal set, or it
    /// was submitted by a seat that is not to act.
    #[error("action is not legal for this seat in the current phase")]
    IllegalAction,

    /// A slot or seat index is out of range, the target seat must differ
    /// from the actor, or a King decision named a slot other than the one
    /// peeked.
    #[error("slot or seat target is out of range or not allowed")]
    InvalidTarget,

    /// Cambio was already called this match.
    #[error("cambio has already been called this match")]
    IllegalCall,

    /// Both piles are exhausted; the match aborts.
    #[error("draw and discard piles are both exhausted")]
    EmptyPile,
}

impl GameError {
    /// Whether this error terminates the match instead of allowing a retry.
    #[must_use]
    pub fn is_fatal(self) -> bool {
        matches!(self, GameError::EmptyPile)
    }
}
