//! Archetype special attacks.

use crate::config::GameConfig;
use crate::state::Combatant;

use super::damage::{mitigate, scale};

/// One-shot special attack granted by an archetype.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SpecialAttack {
    /// Warrior: a double-strength blow resolved as a normal hit.
    PowerStrike,
    /// Mage: 150% attack that only half-respects the target's defense.
    ArcaneBlast,
    /// Rogue: coats the target in poison.
    Venom,
}

/// Result of a special attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialOutcome {
    /// Direct damage dealt to the target.
    Damage { attack: SpecialAttack, damage: u32 },
    /// Poison applied to the target, replacing whatever it had.
    Poison {
        damage_per_tick: u32,
        ticks: u32,
    },
}

impl SpecialAttack {
    /// Resolves the attack from `attacker` against `target`.
    ///
    /// - PowerStrike: `2 * ATK` through the target's normal damage path
    /// - ArcaneBlast: `ATK * 3 / 2`, minus half the target's defense if it is
    ///   defending, floored at 1; the target's defending flag is cleared
    /// - Venom: poison for 10 per tick over 3 ticks
    pub fn perform(self, attacker: &Combatant, target: &mut Combatant) -> SpecialOutcome {
        match self {
            SpecialAttack::PowerStrike => {
                let damage = target.apply_damage(scale(attacker.attack_power(), 2, 1));
                SpecialOutcome::Damage {
                    attack: self,
                    damage,
                }
            }
            SpecialAttack::ArcaneBlast => {
                let raw = scale(attacker.attack_power(), 3, 2);
                let half_defense = scale(target.defense_power(), 1, 2);
                let damage = mitigate(raw, half_defense, target.is_defending());
                target.lose_health(damage);
                target.set_defending(false);
                SpecialOutcome::Damage {
                    attack: self,
                    damage,
                }
            }
            SpecialAttack::Venom => {
                target.apply_poison(GameConfig::VENOM_DAMAGE_PER_TICK, GameConfig::VENOM_TICKS);
                SpecialOutcome::Poison {
                    damage_per_tick: GameConfig::VENOM_DAMAGE_PER_TICK,
                    ticks: GameConfig::VENOM_TICKS,
                }
            }
        }
    }
}
