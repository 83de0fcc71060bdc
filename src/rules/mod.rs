//! Rules: legality, resolution, powers, and scoring.
//!
//! The resolver is the only writer of hands and piles; the turn module
//! owns phase transitions; the power table is a single closed mapping so
//! the whole action space stays statically enumerable.

pub mod powers;
pub mod resolver;
pub mod scorer;
pub mod turn;

pub use powers::power_of;
pub use resolver::resolve;
pub use scorer::{score, MatchOutcome, LOSER_REWARD};
pub use turn::legal_actions;
