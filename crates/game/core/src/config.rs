/// Balance constants shared by the turn resolver and special attacks.
///
/// Archetype base stats live on [`crate::Archetype`]; everything else that
/// tunes a battle is collected here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== player actions =====
    /// Health restored by the `heal` action.
    pub const PLAYER_HEAL: u32 = 20;

    // ===== reaction policy =====
    /// Sides of the die rolled to pick the reacting combatant's behaviour.
    pub const REACTION_DIE_SIDES: u32 = 10;
    /// Highest roll that still produces a counter-attack.
    pub const REACTION_ATTACK_MAX_ROLL: u32 = 7;
    /// Roll that makes the reacting combatant defend.
    pub const REACTION_DEFEND_ROLL: u32 = 8;
    /// Roll that makes the reacting combatant steal life.
    pub const REACTION_STEAL_ROLL: u32 = 9;
    /// Health restored when the reacting combatant heals.
    pub const REACTION_HEAL: u32 = 15;

    // ===== special attacks =====
    /// Poison damage applied by the Rogue's venom on each tick.
    pub const VENOM_DAMAGE_PER_TICK: u32 = 10;
    /// Number of ticks the Rogue's venom lasts.
    pub const VENOM_TICKS: u32 = 3;
}
