//! Battle state machine and turn pipeline.
//!
//! The [`Battle`] owns both combatants for the lifetime of one fight and is
//! the only place that advances turns. The player always acts and the enemy
//! always reacts:
//!
//! ```text
//! Active --(poison -> action -> reaction)--> Active
//!        \--(either side reaches 0 HP)-----> Finished { winner }
//! ```

mod turns;

pub use turns::{PoisonReport, TurnReport, resolve_turn};

use crate::action::ActionKind;
use crate::env::RngOracle;
use crate::error::CombatError;
use crate::state::Combatant;

/// Which side of the battle a combatant is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// The acting side, driven by player choices.
    Player,
    /// The reacting side, driven by the reaction table.
    Enemy,
}

/// Lifecycle of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleStatus {
    Active,
    Finished { winner: Side },
}

/// A single battle between a player combatant and an enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battle {
    player: Combatant,
    enemy: Combatant,
    turns_played: u32,
}

impl Battle {
    pub fn new(player: Combatant, enemy: Combatant) -> Self {
        Self {
            player,
            enemy,
            turns_played: 0,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Number of turns resolved so far.
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Returns the current lifecycle state.
    ///
    /// If both sides are down the enemy is declared the winner; the player's
    /// survival is what decides a victory.
    pub fn status(&self) -> BattleStatus {
        if !self.player.is_alive() {
            BattleStatus::Finished { winner: Side::Enemy }
        } else if !self.enemy.is_alive() {
            BattleStatus::Finished {
                winner: Side::Player,
            }
        } else {
            BattleStatus::Active
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status(), BattleStatus::Finished { .. })
    }

    /// Plays one turn with the player's chosen action.
    ///
    /// Errors leave the battle unchanged, turn counter included.
    pub fn play_turn(
        &mut self,
        action: ActionKind,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<TurnReport, CombatError> {
        if self.is_over() {
            return Err(CombatError::BattleOver);
        }

        let report = resolve_turn(&mut self.player, &mut self.enemy, action, rng)?;
        self.turns_played += 1;
        Ok(report)
    }
}
