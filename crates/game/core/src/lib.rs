//! Deterministic combat rules for a one-on-one gladiator duel.
//!
//! `gladiator-core` defines the canonical rules (combatants, damage formulas,
//! poison bookkeeping, turn resolution) and exposes pure APIs that the runtime
//! and any frontend can reuse. All randomness flows through
//! [`env::RngOracle`], so a seeded or scripted source reproduces a battle
//! exactly.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{ActionKind, ActionOutcome, ReactionKind, ReactionOutcome};
pub use combat::{DamageRange, SpecialAttack, SpecialOutcome};
pub use config::GameConfig;
pub use engine::{Battle, BattleStatus, PoisonReport, Side, TurnReport, resolve_turn};
pub use env::{PcgRng, RngOracle};
pub use error::{CombatError, ErrorSeverity, GameError};
pub use state::{Archetype, ArchetypeStats, Combatant, CombatantSnapshot, PoisonState};
