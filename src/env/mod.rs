//! The environment façade: masked observations and the reset/step loop.

pub mod facade;
pub mod observation;

pub use facade::{CambioEnv, CambioEnvBuilder, Step, DEFAULT_ILLEGAL_ACTION_PENALTY};
pub use observation::{Observation, SlotView};
