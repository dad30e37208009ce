pub mod effects;
mod session_rng;

pub mod tictactoe;

pub use effects::{EffectsBackend, NoEffects};
pub use session_rng::{ChoiceSource, ScriptedChoices, SessionRng};
