//! Player actions and their reported outcomes.

use crate::combat::SpecialOutcome;

/// Action chosen by the acting combatant.
///
/// `Invalid` is a legitimate selection: it wastes the turn but the battle
/// continues, reaction phase included.
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
pub enum ActionKind {
    /// Strike for 80-120% of attack power.
    Attack,
    /// Brace: the next direct hit is reduced by defense.
    Defend,
    /// Restore a fixed amount of health.
    Heal,
    /// Strike for 80-120% of 150% attack power.
    Heavy,
    /// Drain 30-50% of attack power from the target.
    Steal,
    /// Archetype special attack.
    Special,
    /// Unrecognised selection; the turn is wasted.
    Invalid,
}

impl ActionKind {
    /// The six selectable actions in menu order.
    pub const MENU: [ActionKind; 6] = [
        ActionKind::Attack,
        ActionKind::Defend,
        ActionKind::Heal,
        ActionKind::Heavy,
        ActionKind::Steal,
        ActionKind::Special,
    ];

    /// Parses an action name, mapping anything unrecognised to `Invalid`.
    pub fn parse_or_invalid(name: &str) -> Self {
        name.trim().parse().unwrap_or(ActionKind::Invalid)
    }

    /// Menu label, as shown to the player.
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::Attack => "Attack",
            ActionKind::Defend => "Defend (reduce damage by DEF next turn)",
            ActionKind::Heal => "Heal (+20 HP)",
            ActionKind::Heavy => "Heavy Strike (150% ATK, skip defending)",
            ActionKind::Steal => "Steal HP",
            ActionKind::Special => "Special Attack",
            ActionKind::Invalid => "Invalid",
        }
    }
}

/// What the acting combatant's action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Attacked { damage: u32 },
    Defended,
    /// `amount` is the nominal heal, `restored` what actually fit under max.
    Healed { amount: u32, restored: u32 },
    HeavyStrike { damage: u32 },
    Stole { amount: u32 },
    Special(SpecialOutcome),
    /// Invalid selection; nothing happened.
    Wasted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_names() {
        assert_eq!(ActionKind::parse_or_invalid("attack"), ActionKind::Attack);
        assert_eq!(ActionKind::parse_or_invalid("HEAVY"), ActionKind::Heavy);
        assert_eq!(ActionKind::parse_or_invalid(" steal\n"), ActionKind::Steal);
    }

    #[test]
    fn unknown_names_waste_the_turn() {
        assert_eq!(ActionKind::parse_or_invalid("dance"), ActionKind::Invalid);
        assert_eq!(ActionKind::parse_or_invalid(""), ActionKind::Invalid);
    }

    #[test]
    fn menu_excludes_invalid() {
        assert!(!ActionKind::MENU.contains(&ActionKind::Invalid));
        assert_eq!(ActionKind::MENU[3].to_string(), "heavy");
    }
}
