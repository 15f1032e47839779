//! Action vocabulary for a turn.
//!
//! The acting combatant picks an [`ActionKind`]; the reacting combatant's
//! counter-move is drawn from a fixed table as a [`ReactionKind`]. Both are
//! closed enums so the resolver matches on them exhaustively.
pub mod kind;
pub mod reaction;

pub use kind::{ActionKind, ActionOutcome};
pub use reaction::{ReactionKind, ReactionOutcome};
