//! The combatant entity and its state transitions.

use crate::combat::{SpecialOutcome, mitigate};
use crate::error::CombatError;

use super::archetype::Archetype;
use super::status::PoisonState;

/// A fighter taking part in a single battle.
///
/// # Invariants
///
/// - `0 <= current_health <= max_health` after every operation
/// - `max_health`, `attack_power` and `defense_power` come from the archetype
///   table and never change
/// - `defending` is consumed by the next damage application, whatever its
///   outcome
/// - poison ticks only count down
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    archetype: Archetype,

    current_health: u32,
    max_health: u32,
    attack_power: u32,
    defense_power: u32,

    defending: bool,
    poison: PoisonState,
}

/// Read-only view of a combatant for renderers and event logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantSnapshot {
    pub name: String,
    pub archetype: Archetype,
    pub current_health: u32,
    pub max_health: u32,
    pub attack_power: u32,
    pub defense_power: u32,
    pub defending: bool,
    pub poison_ticks_remaining: u32,
}

impl Combatant {
    /// Creates a combatant at full health with the archetype's base stats.
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        let stats = archetype.base_stats();
        Self {
            name: name.into(),
            archetype,
            current_health: stats.max_health,
            max_health: stats.max_health,
            attack_power: stats.attack_power,
            defense_power: stats.defense_power,
            defending: false,
            poison: PoisonState::NONE,
        }
    }

    // ===== accessors =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn defense_power(&self) -> u32 {
        self.defense_power
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    pub fn poison(&self) -> PoisonState {
        self.poison
    }

    pub fn is_poisoned(&self) -> bool {
        self.poison.is_active()
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Captures the current state for display.
    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            name: self.name.clone(),
            archetype: self.archetype,
            current_health: self.current_health,
            max_health: self.max_health,
            attack_power: self.attack_power,
            defense_power: self.defense_power,
            defending: self.defending,
            poison_ticks_remaining: self.poison.ticks_remaining,
        }
    }

    // ===== state transitions =====

    /// Applies a direct hit and returns the damage actually dealt.
    ///
    /// A defending combatant subtracts its defense from the hit. The result
    /// is floored at 1, and the defending flag is consumed either way.
    pub fn apply_damage(&mut self, incoming: u32) -> u32 {
        let actual = mitigate(incoming, self.defense_power, self.defending);
        self.lose_health(actual);
        self.defending = false;
        actual
    }

    /// Restores health, capped at `max_health`.
    pub fn heal(&mut self, amount: u32) {
        self.current_health = self
            .current_health
            .saturating_add(amount)
            .min(self.max_health);
    }

    pub fn set_defending(&mut self, defending: bool) {
        self.defending = defending;
    }

    /// Drains `amount` health from `target` into `self`.
    ///
    /// The drain ignores the target's defense but still consumes its
    /// defending flag. The caster's own flag is untouched.
    pub fn steal_life(&mut self, amount: u32, target: &mut Combatant) {
        self.heal(amount);
        target.lose_health(amount);
        target.defending = false;
    }

    /// Replaces any current poison; applications never stack.
    pub fn apply_poison(&mut self, damage_per_tick: u32, ticks: u32) {
        self.poison = PoisonState::new(damage_per_tick, ticks);
    }

    /// Applies one poison tick and returns the damage dealt (0 when not
    /// poisoned). Poison ignores defense and leaves the defending flag alone.
    pub fn tick_poison(&mut self) -> u32 {
        let damage = self.poison.tick();
        self.lose_health(damage);
        damage
    }

    /// Performs this combatant's archetype special attack on `target`.
    ///
    /// Fails for archetypes without a special attack; nothing is mutated in
    /// that case.
    pub fn perform_special_attack(
        &self,
        target: &mut Combatant,
    ) -> Result<SpecialOutcome, CombatError> {
        let special = self
            .archetype
            .special_attack()
            .ok_or(CombatError::NoSpecialAttack {
                archetype: self.archetype,
            })?;
        Ok(special.perform(self, target))
    }

    /// Removes health without mitigation, floored at 0.
    pub(crate) fn lose_health(&mut self, amount: u32) {
        self.current_health = self.current_health.saturating_sub(amount);
    }
}
