//! Combatant state representation.
//!
//! This module owns the data that describes a fighter: its archetype and the
//! stats it fixes, current health, the one-shot defending flag, and poison
//! bookkeeping. Turn orchestration lives in [`crate::engine`]; everything here
//! only mutates the combatants it is handed.
pub mod archetype;
pub mod combatant;
pub mod status;

pub use archetype::{Archetype, ArchetypeStats};
pub use combatant::{Combatant, CombatantSnapshot};
pub use status::PoisonState;
