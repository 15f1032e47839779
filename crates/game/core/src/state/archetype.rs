//! Fighter archetypes and the base stats they fix.

use crate::combat::SpecialAttack;
use crate::error::CombatError;

/// Base stats fixed by an archetype at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArchetypeStats {
    pub max_health: u32,
    pub attack_power: u32,
    pub defense_power: u32,
}

/// Fighter archetype (closed set).
///
/// The archetype is immutable for the lifetime of a combatant and determines
/// both the base stat table and which special attack is available.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    /// Tanky melee fighter.
    Warrior,
    /// High damage, low health spellcaster.
    Mage,
    /// Balanced fighter with a poisoned blade.
    Rogue,
    /// Huge health pool, no special attack.
    Dragon,
}

impl Archetype {
    /// All archetypes in menu order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Warrior,
        Archetype::Mage,
        Archetype::Rogue,
        Archetype::Dragon,
    ];

    /// Returns the fixed stat table for this archetype.
    ///
    /// | Archetype | Max HP | ATK | DEF |
    /// |-----------|--------|-----|-----|
    /// | Warrior   | 300    | 15  | 15  |
    /// | Mage      | 150    | 30  | 10  |
    /// | Rogue     | 200    | 20  | 20  |
    /// | Dragon    | 500    | 10  | 10  |
    pub const fn base_stats(self) -> ArchetypeStats {
        match self {
            Archetype::Warrior => ArchetypeStats {
                max_health: 300,
                attack_power: 15,
                defense_power: 15,
            },
            Archetype::Mage => ArchetypeStats {
                max_health: 150,
                attack_power: 30,
                defense_power: 10,
            },
            Archetype::Rogue => ArchetypeStats {
                max_health: 200,
                attack_power: 20,
                defense_power: 20,
            },
            Archetype::Dragon => ArchetypeStats {
                max_health: 500,
                attack_power: 10,
                defense_power: 10,
            },
        }
    }

    /// Returns the special attack this archetype can perform, if any.
    pub const fn special_attack(self) -> Option<SpecialAttack> {
        match self {
            Archetype::Warrior => Some(SpecialAttack::PowerStrike),
            Archetype::Mage => Some(SpecialAttack::ArcaneBlast),
            Archetype::Rogue => Some(SpecialAttack::Venom),
            Archetype::Dragon => None,
        }
    }

    /// Short flavour text shown next to the archetype in selection menus.
    pub const fn description(self) -> &'static str {
        match self {
            Archetype::Warrior => "Tanky",
            Archetype::Mage => "High damage, low HP",
            Archetype::Rogue => "Balanced",
            Archetype::Dragon => "Ancient beast",
        }
    }

    /// Parses an archetype name case-insensitively.
    ///
    /// Unknown names are a contract violation: callers are expected to offer
    /// only the four archetypes.
    pub fn parse(name: &str) -> Result<Self, CombatError> {
        name.trim()
            .parse()
            .map_err(|_| CombatError::InvalidArchetype(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_table_matches_archetypes() {
        let warrior = Archetype::Warrior.base_stats();
        assert_eq!(
            (warrior.max_health, warrior.attack_power, warrior.defense_power),
            (300, 15, 15)
        );

        let mage = Archetype::Mage.base_stats();
        assert_eq!(
            (mage.max_health, mage.attack_power, mage.defense_power),
            (150, 30, 10)
        );

        let rogue = Archetype::Rogue.base_stats();
        assert_eq!(
            (rogue.max_health, rogue.attack_power, rogue.defense_power),
            (200, 20, 20)
        );

        let dragon = Archetype::Dragon.base_stats();
        assert_eq!(
            (dragon.max_health, dragon.attack_power, dragon.defense_power),
            (500, 10, 10)
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Archetype::parse("Warrior"), Ok(Archetype::Warrior));
        assert_eq!(Archetype::parse("  MAGE "), Ok(Archetype::Mage));
        assert_eq!(Archetype::parse("dragon"), Ok(Archetype::Dragon));
    }

    #[test]
    fn parse_rejects_unknown_archetype() {
        assert_eq!(
            Archetype::parse("paladin"),
            Err(CombatError::InvalidArchetype("paladin".into()))
        );
    }

    #[test]
    fn only_dragon_lacks_special_attack() {
        for archetype in Archetype::ALL {
            assert_eq!(
                archetype.special_attack().is_none(),
                archetype == Archetype::Dragon
            );
        }
    }
}
