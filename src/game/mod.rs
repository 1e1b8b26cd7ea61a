//! Game state machine.
//!
//! - `GameSession`: the per-playthrough state machine
//! - `SelectOutcome`: what a selection did
//! - `SelectionBuffer`: face-up, unresolved cards (at most two)
//! - `SessionSnapshot`: serializable view for rendering

mod selection;
mod session;
mod snapshot;

pub use selection::SelectionBuffer;
pub use session::{GameSession, SelectOutcome};
pub use snapshot::{CardView, SessionSnapshot};
