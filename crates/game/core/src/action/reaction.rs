//! Counter-reaction policy for the reacting combatant.
//!
//! The reacting side has no archetype-specific AI; its behaviour is a fixed
//! discrete distribution over a d10:
//!
//! | Roll  | Reaction |
//! |-------|----------|
//! | 1-7   | Attack   |
//! | 8     | Defend   |
//! | 9     | Steal    |
//! | 10    | Heal +15 |

use crate::config::GameConfig;

/// Counter-move picked by the reaction roll.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ReactionKind {
    Attack,
    Defend,
    Steal,
    Heal,
}

impl ReactionKind {
    /// Maps a d10 roll onto the reaction table.
    ///
    /// Rolls beyond the table fall through to `Heal`.
    pub const fn from_roll(roll: u32) -> Self {
        if roll <= GameConfig::REACTION_ATTACK_MAX_ROLL {
            ReactionKind::Attack
        } else if roll == GameConfig::REACTION_DEFEND_ROLL {
            ReactionKind::Defend
        } else if roll == GameConfig::REACTION_STEAL_ROLL {
            ReactionKind::Steal
        } else {
            ReactionKind::Heal
        }
    }
}

/// What the reacting combatant's counter-move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionOutcome {
    Attacked { damage: u32 },
    Defended,
    Stole { amount: u32 },
    Healed { amount: u32, restored: u32 },
}
