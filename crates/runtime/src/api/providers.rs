//! Abstraction for sourcing the player's intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a battle can
//! run with human input, scripted fixtures, or a fixed policy.
use std::collections::VecDeque;

use gladiator_core::{ActionKind, Battle};

use super::errors::{Result, RuntimeError};

/// Trait for providing the player's action based on the current battle.
///
/// Different implementations can handle:
/// - Player input (from a console menu)
/// - Scripted/replayed actions
/// - Testing fixtures
pub trait ActionProvider {
    /// Provide the action for the next turn.
    ///
    /// # Arguments
    /// * `battle` - Read-only view of the battle before the turn
    fn provide_action(&mut self, battle: &Battle) -> Result<ActionKind>;
}

/// Always returns the same action.
#[derive(Clone, Copy, Debug)]
pub struct FixedActionProvider(pub ActionKind);

impl ActionProvider for FixedActionProvider {
    fn provide_action(&mut self, _battle: &Battle) -> Result<ActionKind> {
        Ok(self.0)
    }
}

/// Replays a queue of actions, failing once it runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedActionProvider {
    actions: VecDeque<ActionKind>,
}

impl ScriptedActionProvider {
    pub fn new(actions: impl IntoIterator<Item = ActionKind>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Actions not yet handed out.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionProvider for ScriptedActionProvider {
    fn provide_action(&mut self, _battle: &Battle) -> Result<ActionKind> {
        self.actions
            .pop_front()
            .ok_or(RuntimeError::ProviderExhausted)
    }
}
