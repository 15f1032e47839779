//! Runtime orchestration for a gladiator battle.
//!
//! This crate wires the pure rules of `gladiator-core` to the outside world:
//! it owns the battle and its random source, asks an [`ActionProvider`] for
//! the player's choice each turn, and turns every [`gladiator_core::TurnReport`]
//! into a stream of [`BattleEvent`]s for frontends to render.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, its builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] describes what happened during a battle
pub mod api;
pub mod events;
pub mod runtime;

pub use api::{ActionProvider, FixedActionProvider, Result, RuntimeError, ScriptedActionProvider};
pub use events::{BattleEvent, extract_events};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
