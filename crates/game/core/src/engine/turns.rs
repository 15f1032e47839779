//! Turn resolution.
//!
//! One turn is strictly sequential:
//!
//! 1. **Poison phase**: tick the actor's poison, then the target's
//! 2. **Action phase**: the actor executes exactly one [`ActionKind`]
//! 3. **Reaction phase**: if the target survived, it counter-acts according
//!    to the [`ReactionKind`] table

use crate::action::{ActionKind, ActionOutcome, ReactionKind, ReactionOutcome};
use crate::combat::DamageRange;
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::CombatError;
use crate::state::Combatant;

/// Poison damage dealt at the start of a turn (0 when not poisoned).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoisonReport {
    pub actor: u32,
    pub target: u32,
}

/// Everything that happened during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub poison: PoisonReport,
    pub action: ActionOutcome,
    /// `None` when the target fell before it could react.
    pub reaction: Option<ReactionOutcome>,
}

/// Resolves one full turn of `actor` acting on `target`.
///
/// A `Special` action from an archetype without a special attack is rejected
/// before any phase runs, leaving both combatants untouched.
pub fn resolve_turn(
    actor: &mut Combatant,
    target: &mut Combatant,
    action: ActionKind,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<TurnReport, CombatError> {
    if action == ActionKind::Special && actor.archetype().special_attack().is_none() {
        return Err(CombatError::NoSpecialAttack {
            archetype: actor.archetype(),
        });
    }

    // 1. Poison phase
    let poison = PoisonReport {
        actor: actor.tick_poison(),
        target: target.tick_poison(),
    };

    // 2. Action phase
    let action = execute_action(actor, target, action, rng)?;

    // 3. Reaction phase
    let reaction = if target.is_alive() {
        Some(execute_reaction(target, actor, rng))
    } else {
        None
    };

    Ok(TurnReport {
        poison,
        action,
        reaction,
    })
}

fn execute_action(
    actor: &mut Combatant,
    target: &mut Combatant,
    action: ActionKind,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<ActionOutcome, CombatError> {
    let outcome = match action {
        ActionKind::Attack => {
            let roll = DamageRange::attack(actor.attack_power()).roll(rng);
            ActionOutcome::Attacked {
                damage: target.apply_damage(roll),
            }
        }
        ActionKind::Defend => {
            actor.set_defending(true);
            ActionOutcome::Defended
        }
        ActionKind::Heal => {
            let restored = heal_and_measure(actor, GameConfig::PLAYER_HEAL);
            ActionOutcome::Healed {
                amount: GameConfig::PLAYER_HEAL,
                restored,
            }
        }
        ActionKind::Heavy => {
            let roll = DamageRange::heavy(actor.attack_power()).roll(rng);
            let damage = target.apply_damage(roll);
            actor.set_defending(false);
            ActionOutcome::HeavyStrike { damage }
        }
        ActionKind::Steal => {
            let amount = DamageRange::steal(actor.attack_power()).roll(rng);
            actor.steal_life(amount, target);
            ActionOutcome::Stole { amount }
        }
        ActionKind::Special => {
            actor.set_defending(false);
            ActionOutcome::Special(actor.perform_special_attack(target)?)
        }
        ActionKind::Invalid => ActionOutcome::Wasted,
    };
    Ok(outcome)
}

fn execute_reaction(
    reactor: &mut Combatant,
    opponent: &mut Combatant,
    rng: &mut (impl RngOracle + ?Sized),
) -> ReactionOutcome {
    let roll = rng.roll_die(GameConfig::REACTION_DIE_SIDES);
    match ReactionKind::from_roll(roll) {
        ReactionKind::Attack => {
            let roll = DamageRange::attack(reactor.attack_power()).roll(rng);
            ReactionOutcome::Attacked {
                damage: opponent.apply_damage(roll),
            }
        }
        ReactionKind::Defend => {
            reactor.set_defending(true);
            ReactionOutcome::Defended
        }
        ReactionKind::Steal => {
            let amount = DamageRange::steal(reactor.attack_power()).roll(rng);
            reactor.steal_life(amount, opponent);
            ReactionOutcome::Stole { amount }
        }
        ReactionKind::Heal => {
            let restored = heal_and_measure(reactor, GameConfig::REACTION_HEAL);
            ReactionOutcome::Healed {
                amount: GameConfig::REACTION_HEAL,
                restored,
            }
        }
    }
}

fn heal_and_measure(combatant: &mut Combatant, amount: u32) -> u32 {
    let before = combatant.current_health();
    combatant.heal(amount);
    combatant.current_health() - before
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::combat::{SpecialAttack, SpecialOutcome};
    use crate::state::{Archetype, PoisonState};

    /// Returns queued values for `range` calls, ignoring the bounds.
    struct Rolls(VecDeque<u32>);

    impl Rolls {
        fn new(values: &[u32]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl RngOracle for Rolls {
        fn next_u32(&mut self) -> u32 {
            unreachable!("range is overridden")
        }

        fn range(&mut self, _min: u32, _max: u32) -> u32 {
            self.0.pop_front().expect("test ran out of rolls")
        }
    }

    fn duel() -> (Combatant, Combatant) {
        (
            Combatant::new("Brakka", Archetype::Warrior),
            Combatant::new("Shadow", Archetype::Dragon),
        )
    }

    #[test]
    fn attack_then_counter_attack() {
        let (mut warrior, mut dragon) = duel();
        // attack roll, reaction d10, reaction damage roll
        let mut rng = Rolls::new(&[15, 3, 10]);

        let report = resolve_turn(&mut warrior, &mut dragon, ActionKind::Attack, &mut rng).unwrap();

        assert_eq!(report.poison, PoisonReport::default());
        assert_eq!(report.action, ActionOutcome::Attacked { damage: 15 });
        assert_eq!(report.reaction, Some(ReactionOutcome::Attacked { damage: 10 }));
        assert_eq!(dragon.current_health(), 485);
        assert_eq!(warrior.current_health(), 290);
    }

    #[test]
    fn defend_absorbs_the_counter_attack() {
        let (mut warrior, mut dragon) = duel();
        let mut rng = Rolls::new(&[1, 12]);

        let report = resolve_turn(&mut warrior, &mut dragon, ActionKind::Defend, &mut rng).unwrap();

        assert_eq!(report.action, ActionOutcome::Defended);
        // 12 - 15 defense floors at 1
        assert_eq!(report.reaction, Some(ReactionOutcome::Attacked { damage: 1 }));
        assert_eq!(warrior.current_health(), 299);
        assert!(!warrior.is_defending());
    }

    #[test]
    fn heal_reports_what_was_restored() {
        let (mut warrior, mut dragon) = duel();
        warrior.apply_damage(5);
        let mut rng = Rolls::new(&[8]);

        let report = resolve_turn(&mut warrior, &mut dragon, ActionKind::Heal, &mut rng).unwrap();

        assert_eq!(
            report.action,
            ActionOutcome::Healed {
                amount: 20,
                restored: 5
            }
        );
        assert_eq!(report.reaction, Some(ReactionOutcome::Defended));
        assert_eq!(warrior.current_health(), 300);
        assert!(dragon.is_defending());
    }

    #[test]
    fn heavy_strike_clears_own_defending() {
        let (mut warrior, mut dragon) = duel();
        warrior.set_defending(true);
        let mut rng = Rolls::new(&[22, 10]);

        let report = resolve_turn(&mut warrior, &mut dragon, ActionKind::Heavy, &mut rng).unwrap();

        assert_eq!(report.action, ActionOutcome::HeavyStrike { damage: 22 });
        assert!(!warrior.is_defending());
        assert_eq!(
            report.reaction,
            Some(ReactionOutcome::Healed {
                amount: 15,
                restored: 15
            })
        );
        assert_eq!(dragon.current_health(), 493);
    }

    #[test]
    fn steal_and_steal_back() {
        let (mut warrior, mut dragon) = duel();
        warrior.apply_damage(50);
        // steal 6, reaction 9 (steal), reaction amount 4
        let mut rng = Rolls::new(&[6, 9, 4]);

        let report = resolve_turn(&mut warrior, &mut dragon, ActionKind::Steal, &mut rng).unwrap();

        assert_eq!(report.action, ActionOutcome::Stole { amount: 6 });
        assert_eq!(report.reaction, Some(ReactionOutcome::Stole { amount: 4 }));
        assert_eq!(warrior.current_health(), 252);
        assert_eq!(dragon.current_health(), 498);
    }

    #[test]
    fn special_clears_own_defending_first() {
        let mut rogue = Combatant::new("Vex", Archetype::Rogue);
        let mut dragon = Combatant::new("Shadow", Archetype::Dragon);
        rogue.set_defending(true);
        let mut rng = Rolls::new(&[8]);

        let report = resolve_turn(&mut rogue, &mut dragon, ActionKind::Special, &mut rng).unwrap();

        assert_eq!(
            report.action,
            ActionOutcome::Special(SpecialOutcome::Poison {
                damage_per_tick: 10,
                ticks: 3
            })
        );
        assert!(!rogue.is_defending());
        assert_eq!(dragon.poison(), PoisonState::new(10, 3));
    }

    #[test]
    fn poison_ticks_before_the_action() {
        let mut rogue = Combatant::new("Vex", Archetype::Rogue);
        let mut dragon = Combatant::new("Shadow", Archetype::Dragon);
        rogue.apply_poison(4, 1);
        dragon.apply_poison(10, 3);
        let mut rng = Rolls::new(&[8]);

        let report = resolve_turn(&mut rogue, &mut dragon, ActionKind::Invalid, &mut rng).unwrap();

        assert_eq!(report.poison, PoisonReport { actor: 4, target: 10 });
        assert_eq!(report.action, ActionOutcome::Wasted);
        assert_eq!(report.reaction, Some(ReactionOutcome::Defended));
        assert!(!rogue.is_poisoned());
        assert_eq!(dragon.poison().ticks_remaining, 2);
        assert_eq!(dragon.current_health(), 490);
    }

    #[test]
    fn no_reaction_from_a_fallen_target() {
        let mut mage = Combatant::new("Ilya", Archetype::Mage);
        let mut rogue = Combatant::new("Vex", Archetype::Rogue);
        rogue.apply_damage(190);
        let mut rng = Rolls::new(&[]);

        let report = resolve_turn(&mut mage, &mut rogue, ActionKind::Special, &mut rng).unwrap();

        assert_eq!(
            report.action,
            ActionOutcome::Special(SpecialOutcome::Damage {
                attack: SpecialAttack::ArcaneBlast,
                damage: 45
            })
        );
        assert_eq!(report.reaction, None);
        assert!(!rogue.is_alive());
    }

    #[test]
    fn poison_can_finish_the_target_before_the_action() {
        let (mut warrior, mut dragon) = duel();
        dragon.apply_damage(495);
        dragon.apply_poison(10, 3);
        let mut rng = Rolls::new(&[15]);

        let report = resolve_turn(&mut warrior, &mut dragon, ActionKind::Attack, &mut rng).unwrap();

        assert_eq!(report.poison.target, 10);
        assert_eq!(report.action, ActionOutcome::Attacked { damage: 15 });
        assert_eq!(report.reaction, None);
        assert_eq!(dragon.current_health(), 0);
    }

    #[test]
    fn dragon_special_is_rejected_without_side_effects() {
        let mut dragon = Combatant::new("Shadow", Archetype::Dragon);
        let mut warrior = Combatant::new("Brakka", Archetype::Warrior);
        dragon.apply_poison(10, 3);
        dragon.set_defending(true);
        let before = (dragon.clone(), warrior.clone());
        let mut rng = Rolls::new(&[]);

        let err =
            resolve_turn(&mut dragon, &mut warrior, ActionKind::Special, &mut rng).unwrap_err();

        assert_eq!(
            err,
            CombatError::NoSpecialAttack {
                archetype: Archetype::Dragon
            }
        );
        assert_eq!((dragon, warrior), before);
    }
}
